//! Multipart form handling shared by post create and update.
//!
//! Posts arrive as `multipart/form-data`: an image under `post_picture`,
//! plain-text `description` and `is_published` fields, and `techniques` as a
//! JSON-encoded array of technique ids (the way HTML forms smuggle arrays).

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::uploads::MAX_FILE_SIZE;

#[derive(Debug, Default)]
pub struct PostForm {
    pub description: Option<String>,
    pub is_published: Option<bool>,
    pub techniques: Option<Vec<i32>>,
    pub image: Option<Bytes>,
}

pub fn parse_techniques(raw: &str) -> Result<Vec<i32>, ()> {
    serde_json::from_str(raw).map_err(|_| ())
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> (StatusCode, String) {
    tracing::warn!("Multipart read error: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        (
            e.status(),
            format!("File too large. Maximum size is {} bytes", MAX_FILE_SIZE),
        )
    } else {
        (
            e.status(),
            format!("Failed to read multipart data: {}", e.body_text()),
        )
    }
}

pub async fn parse_post_form(mut multipart: Multipart) -> Result<PostForm, (StatusCode, String)> {
    let mut form = PostForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(multipart_error(e)),
        };

        // The name borrows the field; take an owned copy so the field can be consumed
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("description") => {
                form.description = Some(field.text().await.map_err(multipart_error)?);
            }
            Some("is_published") => {
                let raw = field.text().await.map_err(multipart_error)?;
                form.is_published = Some(raw.parse().map_err(|_| {
                    (
                        StatusCode::BAD_REQUEST,
                        "Invalid is_published value".to_string(),
                    )
                })?);
            }
            Some("techniques") => {
                let raw = field.text().await.map_err(multipart_error)?;
                form.techniques = Some(parse_techniques(&raw).map_err(|_| {
                    (
                        StatusCode::BAD_REQUEST,
                        "Invalid techniques format".to_string(),
                    )
                })?);
            }
            Some("post_picture") => {
                form.image = Some(field.bytes().await.map_err(multipart_error)?);
            }
            // Drain unknown fields so the stream keeps advancing
            _ => {
                let _ = field.bytes().await.map_err(multipart_error)?;
            }
        }
    }

    if let Some(ref image) = form.image {
        if image.len() > MAX_FILE_SIZE {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("File too large. Maximum size is {} bytes", MAX_FILE_SIZE),
            ));
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_technique_id_array() {
        assert_eq!(parse_techniques("[1, 3, 5]").unwrap(), vec![1, 3, 5]);
        assert_eq!(parse_techniques("[]").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn rejects_malformed_techniques() {
        assert!(parse_techniques("1,2,3").is_err());
        assert!(parse_techniques("[\"Hydroponics\"]").is_err());
        assert!(parse_techniques("").is_err());
    }
}
