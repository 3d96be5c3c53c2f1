//! Agreement submission client.
//!
//! Thin orchestration over the remote agreement API: validates the booking
//! form, posts it as a single multipart request, and surfaces the
//! server-issued tracking id. One attempt per submission, no retries;
//! double submission is prevented by an in-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::calculator::AgreementType;
use crate::config::Config;
use crate::upload::{self, Attachment};

/// How long the tracking id stays on screen before the form clears.
pub const CLEAR_DELAY: Duration = Duration::from_secs(10);

/// Maximum number of file attachments per submission.
pub const MAX_ATTACHMENTS: usize = 4;

/// The booking form's structured fields.
#[derive(Debug, Clone)]
pub struct AgreementForm {
    pub landlord_name: String,
    pub landlord_contact: String,
    pub landlord_aadhar: String,
    pub landlord_email: String,
    pub tenant_name: String,
    pub tenant_contact: String,
    pub tenant_aadhar: String,
    pub tenant_email: String,
    pub property_address: String,
    pub property_city: String,
    pub property_pincode: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rent_amount: f64,
    pub deposit_amount: f64,
    pub agreement_type: AgreementType,
}

impl AgreementForm {
    /// Text fields in form order, as (wire key, value) pairs.
    fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("landlordName", self.landlord_name.trim().to_string()),
            ("landlordContact", self.landlord_contact.clone()),
            ("landlordAadhar", self.landlord_aadhar.clone()),
            ("landlordEmail", self.landlord_email.clone()),
            ("tenantName", self.tenant_name.trim().to_string()),
            ("tenantContact", self.tenant_contact.clone()),
            ("tenantAadhar", self.tenant_aadhar.clone()),
            ("tenantEmail", self.tenant_email.clone()),
            ("propertyAddress", self.property_address.clone()),
            ("propertyCity", self.property_city.clone()),
            ("propertyPincode", self.property_pincode.clone()),
        ]
    }

    /// Validate that every text field is filled.
    ///
    /// The error names the first offending field in human-readable form
    /// ("landlord name", "property pincode"), matching the on-page alert.
    pub fn validate(&self) -> Result<(), SubmitError> {
        for (key, value) in self.text_fields() {
            if value.trim().is_empty() {
                return Err(SubmitError::EmptyField(humanize_field(key)));
            }
        }
        Ok(())
    }
}

/// Turn a camelCase wire key into the spaced lowercase name shown to users.
fn humanize_field(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Why a submission produced no tracking id.
///
/// `Rejected` (the server answered with an error message) and `Transport`
/// (the request never completed) are deliberately distinct so the UI can
/// show the server's own words for one and a connectivity hint for the
/// other. Both leave the form populated for retry.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("please fill {0}")]
    EmptyField(String),

    #[error("{0}")]
    Attachment(#[from] upload::UploadError),

    #[error("too many attachments: {0} (maximum {MAX_ATTACHMENTS})")]
    TooManyAttachments(usize),

    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("a submission is already in progress")]
    InFlight,
}

/// Success payload from `POST /api/agreements`.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    message: Option<String>,
    #[serde(rename = "agreementId")]
    agreement_id: Option<String>,
}

/// A successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub message: String,
    /// Server-issued tracking identifier ("N/A" when the server omits one)
    pub tracking_id: String,
}

/// Client for the remote agreement endpoint.
pub struct SubmissionClient {
    http: reqwest::Client,
    api_base: String,
    max_upload_bytes: u64,
    in_flight: AtomicBool,
}

impl SubmissionClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            max_upload_bytes: config.max_upload_bytes,
            in_flight: AtomicBool::new(false),
        })
    }

    /// Whether a submission is currently awaiting its response.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit the form and its attachments as one multipart request.
    ///
    /// A single attempt: 2xx parses `{ message, agreementId }` into a
    /// receipt, any other status surfaces the server's `{ message }` as
    /// `Rejected`, and a failure to reach the server at all is `Transport`.
    /// While a request is pending further calls fail fast with `InFlight`.
    pub async fn submit(
        &self,
        form: &AgreementForm,
        attachments: &[Attachment],
    ) -> Result<SubmissionReceipt, SubmitError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SubmitError::InFlight);
        }
        // Re-arm the guard on every exit path, success or failure.
        let _guard = InFlightReset(&self.in_flight);

        form.validate()?;

        if attachments.len() > MAX_ATTACHMENTS {
            return Err(SubmitError::TooManyAttachments(attachments.len()));
        }
        for attachment in attachments {
            upload::validate(attachment, self.max_upload_bytes)?;
        }

        let mut multipart = Form::new();
        for (key, value) in form.text_fields() {
            multipart = multipart.text(key, value);
        }
        multipart = multipart
            .text("startDate", form.start_date.format("%Y-%m-%d").to_string())
            .text("endDate", form.end_date.format("%Y-%m-%d").to_string())
            .text("rentAmount", form.rent_amount.to_string())
            .text("depositAmount", form.deposit_amount.to_string())
            .text("agreementType", form.agreement_type.as_str());

        for attachment in attachments {
            let part = Part::bytes(attachment.bytes.clone())
                .file_name(attachment.file_name.clone())
                .mime_str(&attachment.content_type)?;
            multipart = multipart.part(attachment.slot.clone(), part);
        }

        let url = format!("{}/api/agreements", self.api_base);
        info!("Submitting agreement to {}", url);

        let response = self.http.post(&url).multipart(multipart).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse = response.json().await?;
            let receipt = SubmissionReceipt {
                message: body
                    .message
                    .unwrap_or_else(|| "Agreement created successfully!".to_string()),
                tracking_id: body.agreement_id.unwrap_or_else(|| "N/A".to_string()),
            };
            info!("Agreement submitted, tracking id {}", receipt.tracking_id);
            Ok(receipt)
        } else {
            let message = response
                .json::<ApiResponse>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Failed. Please try again.".to_string());
            warn!("Agreement submission rejected ({}): {}", status, message);
            Err(SubmitError::Rejected(message))
        }
    }
}

/// Clears the in-flight flag when the submission future completes or drops.
struct InFlightReset<'a>(&'a AtomicBool);

impl Drop for InFlightReset<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
