//! Access-check result model

use serde::{Deserialize, Serialize};

/// Result of checking whether a user currently has access to a book.
///
/// When `has_book` is false the remaining path and password fields carry
/// placeholder values; use [`BookAccess::credentials`] so denied checks
/// never expose them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAccess {
    pub out: String,
    pub pass: String,
    pub has_book: bool,
    pub security_version: u32,
    pub library_id: i64,
    pub key: i64,
    #[serde(rename = "passZip")]
    pub pass_zip: String,
    #[serde(rename = "passPdf")]
    pub pass_pdf: String,
}

/// Delivery credentials of a granted access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCredentials<'a> {
    pub out: &'a str,
    pub pass: &'a str,
    pub pass_zip: &'a str,
    pub pass_pdf: &'a str,
    pub key: i64,
    pub security_version: u32,
    pub library_id: i64,
}

impl BookAccess {
    /// Credentials for the protected copy, or `None` when access was denied
    pub fn credentials(&self) -> Option<AccessCredentials<'_>> {
        if !self.has_book {
            if !self.out.is_empty() || !self.pass.is_empty() {
                tracing::debug!(
                    library_id = self.library_id,
                    "ignoring delivery fields on denied access check"
                );
            }
            return None;
        }

        Some(AccessCredentials {
            out: &self.out,
            pass: &self.pass,
            pass_zip: &self.pass_zip,
            pass_pdf: &self.pass_pdf,
            key: self.key,
            security_version: self.security_version,
            library_id: self.library_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_password_keys() {
        let json = r#"{
            "out": "/files/out/1001.zip",
            "pass": "s3cret",
            "has_book": true,
            "security_version": 2,
            "library_id": 11,
            "key": 9931,
            "passZip": "zip-pass",
            "passPdf": "pdf-pass"
        }"#;
        let access: BookAccess = serde_json::from_str(json).unwrap();
        assert_eq!(access.pass_zip, "zip-pass");
        assert_eq!(access.pass_pdf, "pdf-pass");

        let creds = access.credentials().unwrap();
        assert_eq!(creds.out, "/files/out/1001.zip");
        assert_eq!(creds.key, 9931);
    }

    #[test]
    fn test_denied_access_yields_no_credentials() {
        let denied = BookAccess {
            out: "placeholder".into(),
            pass: String::new(),
            has_book: false,
            security_version: 0,
            library_id: 11,
            key: 0,
            pass_zip: String::new(),
            pass_pdf: String::new(),
        };
        assert!(denied.credentials().is_none());
    }
}
