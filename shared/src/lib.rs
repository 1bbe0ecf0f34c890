//! Platform-neutral behavior of the nutrition tips landing page.
//!
//! Every decision the page makes lives here: which fragment a link scrolls
//! to, when the back-to-top control shows, what the article modal displays,
//! and whether the subscription form is accepted. The `nutri-page-frontend`
//! crate only binds these to DOM events.

pub mod articles;
pub mod back_to_top;
pub mod i18n;
pub mod modal;
pub mod nav_menu;
pub mod smooth_scroll;
pub mod subscribe;

pub use articles::{ArticleCatalog, ArticleEntry};
pub use back_to_top::{BackToTop, ScrollThrottle, ThrottleDecision};
pub use modal::ArticleModal;
pub use nav_menu::NavMenu;
pub use subscribe::{Field, FieldError, FormMessage, SubmitOutcome, Submission, SubscribeInput};
