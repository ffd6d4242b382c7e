pub mod brevo;

pub use brevo::BrevoContactClient;
