use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chipscout_core::config::{UploadConfig, DEFAULT_MAX_BOM_BYTES};
use thiserror::Error;

pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 2000;

/// Mime types accepted for BOM uploads.
pub const ALLOWED_BOM_MIME_TYPES: &[&str] = &[
    "text/csv",
    "text/plain",
    "text/tab-separated-values",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("description is {actual} characters, the limit is {max}")]
    DescriptionTooLong { max: usize, actual: usize },
    #[error("file must be a base64 data URI")]
    MalformedDataUri,
    #[error("file payload is not valid base64")]
    InvalidBase64,
    #[error("file type `{0}` is not supported")]
    UnsupportedFileType(String),
    #[error("file is empty")]
    EmptyFile,
    #[error("file is {actual} bytes, the limit is {max}")]
    FileTooLarge { max: usize, actual: usize },
}

impl ValidationError {
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::EmptyDescription => "description_empty",
            Self::DescriptionTooLong { .. } => "description_too_long",
            Self::MalformedDataUri => "file_malformed",
            Self::InvalidBase64 => "file_not_base64",
            Self::UnsupportedFileType(_) => "file_type_unsupported",
            Self::EmptyFile => "file_empty",
            Self::FileTooLarge { .. } => "file_too_large",
        }
    }
}

/// A decoded BOM upload that passed every check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BomUpload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub description: String,
}

impl BomUpload {
    /// Spreadsheet mime types carry binary workbooks rather than delimited text.
    pub fn is_textual(&self) -> bool {
        self.mime_type.starts_with("text/")
    }
}

/// Input checks that run before any completion request is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardrailPolicy {
    pub max_description_chars: usize,
    pub max_bom_bytes: usize,
}

impl Default for GuardrailPolicy {
    fn default() -> Self {
        Self {
            max_description_chars: DEFAULT_MAX_DESCRIPTION_CHARS,
            max_bom_bytes: DEFAULT_MAX_BOM_BYTES,
        }
    }
}

impl From<&UploadConfig> for GuardrailPolicy {
    fn from(config: &UploadConfig) -> Self {
        Self {
            max_description_chars: config.max_description_chars,
            max_bom_bytes: config.max_bom_bytes,
        }
    }
}

impl GuardrailPolicy {
    /// Returns the trimmed description.
    pub fn check_description(&self, description: &str) -> Result<String, ValidationError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let actual = trimmed.chars().count();
        if actual > self.max_description_chars {
            return Err(ValidationError::DescriptionTooLong {
                max: self.max_description_chars,
                actual,
            });
        }

        Ok(trimmed.to_owned())
    }

    /// Parse `data:<mime>[;param...];base64,<payload>` and check type and size.
    pub fn check_bom(
        &self,
        file_data_uri: &str,
        description: &str,
    ) -> Result<BomUpload, ValidationError> {
        let description = self.check_description(description)?;

        let rest = file_data_uri.trim().strip_prefix("data:").ok_or(ValidationError::MalformedDataUri)?;
        let (header, payload) = rest.split_once(',').ok_or(ValidationError::MalformedDataUri)?;
        let header = header.strip_suffix(";base64").ok_or(ValidationError::MalformedDataUri)?;

        let mime_type = header.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        if mime_type.is_empty() {
            return Err(ValidationError::MalformedDataUri);
        }
        if !ALLOWED_BOM_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(ValidationError::UnsupportedFileType(mime_type));
        }

        let payload = payload.trim();
        let estimated = payload.len() / 4 * 3;
        if estimated > self.max_bom_bytes + 2 {
            return Err(ValidationError::FileTooLarge {
                max: self.max_bom_bytes,
                actual: estimated,
            });
        }

        let bytes = STANDARD.decode(payload).map_err(|_| ValidationError::InvalidBase64)?;
        if bytes.is_empty() {
            return Err(ValidationError::EmptyFile);
        }
        if bytes.len() > self.max_bom_bytes {
            return Err(ValidationError::FileTooLarge {
                max: self.max_bom_bytes,
                actual: bytes.len(),
            });
        }

        Ok(BomUpload { mime_type, bytes, description })
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    use super::{GuardrailPolicy, ValidationError};

    fn data_uri(mime: &str, bytes: &[u8]) -> String {
        format!("data:{mime};base64,{}", STANDARD.encode(bytes))
    }

    #[test]
    fn description_is_trimmed_and_bounded() {
        let policy = GuardrailPolicy::default();

        assert_eq!(policy.check_description("  3.3V LDO, 500mA  "), Ok("3.3V LDO, 500mA".to_string()));
        assert_eq!(policy.check_description(" \n\t "), Err(ValidationError::EmptyDescription));

        let at_limit = "a".repeat(2000);
        assert!(policy.check_description(&at_limit).is_ok());

        let over = "a".repeat(2001);
        assert_eq!(
            policy.check_description(&over),
            Err(ValidationError::DescriptionTooLong { max: 2000, actual: 2001 })
        );
    }

    #[test]
    fn csv_upload_is_accepted() {
        let policy = GuardrailPolicy::default();
        let csv = b"designator,part,qty\nU1,STM32F103C8T6,1\nU2,AMS1117-3.3,1\n";

        let upload = policy
            .check_bom(&data_uri("text/csv", csv), "replace the regulator")
            .expect("csv upload should pass");

        assert_eq!(upload.mime_type, "text/csv");
        assert_eq!(upload.bytes, csv);
        assert!(upload.is_textual());
    }

    #[test]
    fn mime_parameters_are_ignored() {
        let policy = GuardrailPolicy::default();
        let uri = format!("data:Text/CSV;charset=utf-8;base64,{}", STANDARD.encode(b"a,b\n"));

        let upload = policy.check_bom(&uri, "cheaper parts").expect("upload should pass");
        assert_eq!(upload.mime_type, "text/csv");
    }

    #[test]
    fn disallowed_types_are_rejected() {
        let policy = GuardrailPolicy::default();

        let result = policy.check_bom(&data_uri("image/png", b"\x89PNG"), "find parts");
        assert_eq!(result, Err(ValidationError::UnsupportedFileType("image/png".to_string())));
        assert_eq!(
            result.err().map(|error| error.reason_code()),
            Some("file_type_unsupported")
        );
    }

    #[test]
    fn oversized_upload_is_rejected() {
        let policy = GuardrailPolicy::default();
        let large = vec![b'x'; 5 * 1024 * 1024 + 1];

        let result = policy.check_bom(&data_uri("text/plain", &large), "find parts");
        assert!(matches!(result, Err(ValidationError::FileTooLarge { max, .. }) if max == 5 * 1024 * 1024));

        let exact = vec![b'x'; 5 * 1024 * 1024];
        assert!(policy.check_bom(&data_uri("text/plain", &exact), "find parts").is_ok());
    }

    #[test]
    fn malformed_uris_are_rejected() {
        let policy = GuardrailPolicy::default();

        for uri in ["", "text/csv,abc", "data:text/csv,a,b", "data:;base64,YQ==", "data:text/csv;base64"] {
            assert_eq!(policy.check_bom(uri, "x"), Err(ValidationError::MalformedDataUri), "uri {uri:?}");
        }
        assert_eq!(
            policy.check_bom("data:text/csv;base64,@@@", "x"),
            Err(ValidationError::InvalidBase64)
        );
        assert_eq!(policy.check_bom("data:text/csv;base64,", "x"), Err(ValidationError::EmptyFile));
    }

    #[test]
    fn description_is_checked_before_the_file() {
        let policy = GuardrailPolicy::default();
        assert_eq!(
            policy.check_bom("not a data uri", "   "),
            Err(ValidationError::EmptyDescription)
        );
    }
}
