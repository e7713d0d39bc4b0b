#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod block;
mod digest;
mod error;
mod hasher;
mod reverse;

pub use crate::digest::Md4Digest;
pub use crate::error::DigestSliceError;
pub use crate::hasher::Md4;
pub use crate::reverse::{reverse, unreverse};
