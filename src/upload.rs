//! Booking form file uploads: size validation and preview metadata.

use thiserror::Error;

/// Per-file size cap, matching the booking form's 5MB rule.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Characters of the file name shown in the preview before truncation.
const PREVIEW_NAME_CHARS: usize = 20;

/// The named attachment slots of the booking form, in submission order.
pub const ATTACHMENT_SLOTS: &[&str] = &[
    "landlordAadharFile",
    "tenantAadharFile",
    "propertyProof",
    "photo",
];

/// A file selected into one of the form's attachment slots.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Slot id, one of [`ATTACHMENT_SLOTS`]
    pub slot: String,
    pub file_name: String,
    /// MIME type as reported by the picker (e.g., "image/png")
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// A rejected file selection. Non-fatal: only the offending slot is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("file in slot '{slot}' is {size} bytes, over the {limit} byte limit")]
    TooLarge { slot: String, size: u64, limit: u64 },

    #[error("unknown attachment slot: '{0}'")]
    UnknownSlot(String),
}

/// Validate a selected file against its slot and the size cap.
///
/// An oversized or misplaced file is rejected and its slot cleared by the
/// caller; the rest of the form is unaffected.
pub fn validate(attachment: &Attachment, max_bytes: u64) -> Result<(), UploadError> {
    if !ATTACHMENT_SLOTS.contains(&attachment.slot.as_str()) {
        return Err(UploadError::UnknownSlot(attachment.slot.clone()));
    }
    if attachment.size() > max_bytes {
        return Err(UploadError::TooLarge {
            slot: attachment.slot.clone(),
            size: attachment.size(),
            limit: max_bytes,
        });
    }
    Ok(())
}

/// Preview card metadata for a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    /// File name, truncated to 20 characters with an ellipsis
    pub display_name: String,
    /// Human-readable size, e.g. "123.4 KB"
    pub size_label: String,
    /// Whether to show an image thumbnail instead of a document icon
    pub is_image: bool,
}

/// Build the preview card shown next to a populated slot.
pub fn preview(attachment: &Attachment) -> FilePreview {
    let display_name = if attachment.file_name.chars().count() > PREVIEW_NAME_CHARS {
        let truncated: String = attachment.file_name.chars().take(PREVIEW_NAME_CHARS).collect();
        format!("{}...", truncated)
    } else {
        attachment.file_name.clone()
    };

    FilePreview {
        display_name,
        size_label: format!("{:.1} KB", attachment.size() as f64 / 1024.0),
        is_image: attachment.is_image(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(slot: &str, name: &str, content_type: &str, len: usize) -> Attachment {
        Attachment {
            slot: slot.to_string(),
            file_name: name.to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0u8; len],
        }
    }

    // ==================== Validation ====================

    #[test]
    fn test_file_under_limit_accepted() {
        let att = attachment("photo", "house.jpg", "image/jpeg", 1024);
        assert!(validate(&att, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_file_at_limit_accepted() {
        let att = attachment("photo", "house.jpg", "image/jpeg", MAX_FILE_SIZE as usize);
        assert!(validate(&att, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_oversized_file_rejected() {
        let att = attachment(
            "propertyProof",
            "deed.pdf",
            "application/pdf",
            MAX_FILE_SIZE as usize + 1,
        );

        let err = validate(&att, MAX_FILE_SIZE).unwrap_err();
        assert_eq!(
            err,
            UploadError::TooLarge {
                slot: "propertyProof".to_string(),
                size: MAX_FILE_SIZE + 1,
                limit: MAX_FILE_SIZE,
            }
        );
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let att = attachment("signature", "sig.png", "image/png", 10);
        let err = validate(&att, MAX_FILE_SIZE).unwrap_err();
        assert_eq!(err, UploadError::UnknownSlot("signature".to_string()));
    }

    #[test]
    fn test_all_known_slots_accepted() {
        for slot in ATTACHMENT_SLOTS {
            let att = attachment(slot, "doc.pdf", "application/pdf", 10);
            assert!(validate(&att, MAX_FILE_SIZE).is_ok(), "slot {slot}");
        }
    }

    // ==================== Preview ====================

    #[test]
    fn test_short_name_untruncated() {
        let att = attachment("photo", "house.jpg", "image/jpeg", 2048);
        let p = preview(&att);

        assert_eq!(p.display_name, "house.jpg");
        assert_eq!(p.size_label, "2.0 KB");
        assert!(p.is_image);
    }

    #[test]
    fn test_long_name_truncated_with_ellipsis() {
        let att = attachment(
            "propertyProof",
            "registered-sale-deed-scan-final.pdf",
            "application/pdf",
            1536,
        );
        let p = preview(&att);

        assert_eq!(p.display_name, "registered-sale-deed...");
        assert_eq!(p.size_label, "1.5 KB");
        assert!(!p.is_image);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // Devanagari file names must not split mid-character
        let att = attachment("photo", "मालमत्ता-फोटो-अंतिम-प्रत-स्कॅन.jpg", "image/jpeg", 100);
        let p = preview(&att);

        assert!(p.display_name.ends_with("..."));
        assert_eq!(
            p.display_name.chars().count(),
            23 // 20 name chars + "..."
        );
    }

    #[test]
    fn test_pdf_is_not_image() {
        let att = attachment("tenantAadharFile", "aadhar.pdf", "application/pdf", 100);
        assert!(!preview(&att).is_image);
    }
}
