pub mod clean;
pub mod cli;
pub mod error;
pub mod kubectl;

use std::io::Write;

pub use clean::*;
pub use cli::{ObjectRef, Opts, Overrides};
pub use error::{Error, Result};
pub use kubectl::KubectlGet;

/// Fetch the requested object through kubectl and print it to `out` without its managedFields.
///
/// kubectl's own failures end up on `err` and still count as success.
pub fn run(opts: &Opts, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let object = opts.object()?;
    let overrides = opts.overrides();

    let get = KubectlGet::new(&opts.kubectl, &object, &overrides);
    let mut document = match get.retrieve(err)? {
        Some(document) => document,
        None => return Ok(()),
    };

    if document.strip_hidden_field().is_some() {
        tracing::debug!("dropped {HIDDEN_FIELD}");
    }

    out.write_all(document.to_yaml()?.as_bytes())?;
    out.flush()?;

    Ok(())
}
