//! Integration tests for the releaserc binary

mod helpers;
mod test_assets;
mod test_branch;
mod test_convert;
mod test_init;
mod test_validate;
