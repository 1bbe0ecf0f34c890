//! English copy for the landing page.

/// Subscription form messages.
pub mod subscribe {
    /// Shown under the name field when it is blank.
    pub const NAME_REQUIRED: &str = "Please enter your name.";
    /// Shown under the email field when it is blank.
    pub const EMAIL_REQUIRED: &str = "Email is required.";
    /// Shown under the email field when it does not look like an address.
    pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
    /// Shown under the interest field when nothing is selected.
    pub const INTEREST_REQUIRED: &str = "Please select your primary interest.";
    /// Summary shown in the message slot when any field fails.
    pub const SUMMARY_ERROR: &str = "Please fix the highlighted fields and try again.";
    /// Shown in the message slot after a simulated successful submission.
    pub const SUCCESS: &str =
        "Thank you for subscribing! Check your inbox soon for your first nutrition tips email.";
}

/// Article preview texts keyed by the `data-article` attribute.
pub mod articles {
    /// `protein-breakfast`
    pub const PROTEIN_BREAKFAST: &str = "Discover five satisfying breakfast ideas that prioritize \
                                         protein without complicated recipes—from Greek yogurt \
                                         bowls to savory egg bakes.";
    /// `nutrition-labels`
    pub const NUTRITION_LABELS: &str = "Learn how to quickly scan calories, serving sizes, and \
                                        ingredients so you can compare products with confidence \
                                        in just a few seconds.";
    /// `healthy-snacking`
    pub const HEALTHY_SNACKING: &str = "Set yourself up with grab-and-go options that pair fiber \
                                        and protein, support steady energy, and fit into a \
                                        realistic schedule.";
}
