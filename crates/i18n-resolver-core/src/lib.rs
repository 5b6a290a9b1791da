#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod accept_language;
mod candidates;
mod error;
mod language_tag;

pub use accept_language::{AcceptLanguage, WeightedTag, parse_accept_language};
pub use candidates::{CandidateList, CandidateSources, build_candidates};
pub use error::{CoreError, CoreResult};
pub use language_tag::LanguageTag;
