//! Render a name template for a release tag

use crate::core::error::ReleaseResult;
use crate::core::template::{NameTemplate, TemplateContext};

pub fn run_render(template: &str, tag: String, channel: Option<String>, branch: Option<String>) -> ReleaseResult<()> {
  let template = NameTemplate::parse(template)?;
  let ctx = TemplateContext::from_tag(tag).with_channel(channel).with_branch(branch);
  println!("{}", template.render(&ctx)?);
  Ok(())
}
