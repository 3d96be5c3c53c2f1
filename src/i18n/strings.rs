use crate::i18n::Language;

/// All localized user-facing strings for a language.
///
/// These cover the text the script itself produces (button labels, alerts,
/// submission notices, the call popup). Page content translations live on
/// the document nodes themselves, not here.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Theme Toggle ====================
    /// Label on the theme button while the dark theme is active
    pub theme_light_mode: &'static str,

    /// Label on the theme button while the light theme is active
    pub theme_dark_mode: &'static str,

    // ==================== Form Validation ====================
    /// Alert shown when the calculator inputs are invalid
    pub calculator_invalid: &'static str,

    /// Alert shown when a required form field is empty
    /// Placeholders: {field}
    pub fill_field: &'static str,

    /// Alert shown when an uploaded file exceeds the size cap
    pub file_too_large: &'static str,

    // ==================== Submission ====================
    /// Label on the submit button while a request is in flight
    pub submit_in_progress: &'static str,

    /// Fallback success message when the server omits one
    pub submit_success: &'static str,

    /// Label preceding the server-issued tracking identifier
    pub tracking_id_label: &'static str,

    /// Link text pointing at the status tracking page
    pub track_status_link: &'static str,

    /// Fallback message for a server-rejected submission
    pub submit_rejected: &'static str,

    /// Message shown when the request never reached the server
    pub submit_network_error: &'static str,

    // ==================== Call Popup ====================
    /// Headline of the promotional call popup
    pub popup_headline: &'static str,

    /// Action label of the promotional call popup
    pub popup_call_now: &'static str,
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    // Theme toggle
    theme_light_mode: "Light Mode",
    theme_dark_mode: "Dark Mode",

    // Form validation
    calculator_invalid: "Please fill all fields correctly",
    fill_field: "Please fill {field}",
    file_too_large: "File size must be less than 5MB",

    // Submission
    submit_in_progress: "Processing...",
    submit_success: "Agreement created successfully!",
    tracking_id_label: "Tracking ID",
    track_status_link: "Track your status here",
    submit_rejected: "Failed. Please try again.",
    submit_network_error: "Network error. Please check your connection.",

    // Call popup
    popup_headline: "Need help with your agreement?",
    popup_call_now: "Call Now",
};

// ==================== Marathi Strings ====================

/// Marathi language strings
pub const MARATHI_STRINGS: LanguageStrings = LanguageStrings {
    // Theme toggle
    theme_light_mode: "लाइट मोड",
    theme_dark_mode: "डार्क मोड",

    // Form validation
    calculator_invalid: "कृपया सर्व माहिती योग्यरित्या भरा",
    fill_field: "कृपया {field} भरा",
    file_too_large: "फाइलचा आकार 5MB पेक्षा कमी असावा",

    // Submission
    submit_in_progress: "प्रक्रिया सुरू आहे...",
    submit_success: "करार यशस्वीरित्या तयार झाला!",
    tracking_id_label: "ट्रॅकिंग आयडी",
    track_status_link: "तुमची स्थिती येथे तपासा",
    submit_rejected: "अयशस्वी. कृपया पुन्हा प्रयत्न करा.",
    submit_network_error: "नेटवर्क त्रुटी. कृपया तुमचे कनेक्शन तपासा.",

    // Call popup
    popup_headline: "तुमच्या करारासाठी मदत हवी आहे?",
    popup_call_now: "आता कॉल करा",
};

/// Get the string table for a language.
pub fn strings_for(language: Language) -> &'static LanguageStrings {
    if language == Language::MARATHI {
        &MARATHI_STRINGS
    } else {
        &ENGLISH_STRINGS
    }
}
