// End-to-end tests for the PCore backend API
//
// One PostgreSQL testcontainer is shared by the whole suite. Each test leases
// its own database from a pool (test_db_<uuid>), runs the real router built by
// `build_app` on an ephemeral port and talks to it over HTTP. The contact
// service is replaced by a fake served from a local axum listener.
//
// Databases are truncated and recycled when a test finishes, so tests run in
// parallel.

mod test_admin;
mod test_revalidate;
