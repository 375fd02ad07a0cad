//! Static fixture data rendered by the pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend: listings, analytics figures, FAQ entries and site
//! copy are compiled into the bundle. Pages read these modules directly and
//! never mutate them; the only mutable derived collection is the saved subset
//! in `state::saved`.

pub mod analytics;
pub mod faq;
pub mod listings;
pub mod site;
