use regex::Regex;
use std::sync::LazyLock;

use super::error::AdminServiceError;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));
static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid separator regex"));

/// Lowercase, fold common Italian accents and join words with dashes.
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ä' => 'a',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ò' | 'ó' | 'ô' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            other => other,
        })
        .collect();

    NON_SLUG_CHARS
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}

pub fn validate_slug(slug: &str) -> Result<(), AdminServiceError> {
    if !SLUG_PATTERN.is_match(slug) {
        return Err(AdminServiceError::Invalid(format!(
            "Invalid slug '{}': use lowercase letters, digits and dashes",
            slug
        )));
    }
    Ok(())
}

/// Use the explicit slug if given, otherwise derive one from `fallback`.
pub fn resolve_slug(
    slug: Option<&str>,
    fallback: Option<&str>,
) -> Result<Option<String>, AdminServiceError> {
    let slug = match (slug.map(str::trim), fallback) {
        (Some(explicit), _) if !explicit.is_empty() => explicit.to_string(),
        (_, Some(name)) => slugify(name),
        _ => return Ok(None),
    };

    if slug.is_empty() {
        return Ok(None);
    }
    validate_slug(&slug)?;
    Ok(Some(slug))
}

pub fn validate_url(field: &str, url: Option<&str>) -> Result<(), AdminServiceError> {
    match url {
        Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => Err(
            AdminServiceError::Invalid(format!("Invalid URL format for {}", field)),
        ),
        _ => Ok(()),
    }
}

/// Trim text fields and turn blank strings into `None`.
pub fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
