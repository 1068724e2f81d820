//! Access probe run before listing or exporting

use crate::infrastructure::NotesSource;
use tracing::debug;

/// Banner shown when the note store could not be reached
pub const PROBE_BANNER: &str = "\
Warning: could not confirm access to your notes.
If folders or notes are missing, allow this terminal to control Notes in
System Settings > Privacy & Security > Automation, then run again.";

/// Check store access. Never fails; returns the banner to show, if any.
pub fn probe_access<S: NotesSource>(source: &S) -> Option<&'static str> {
    match source.probe() {
        Ok(()) => {
            debug!("note store access confirmed");
            None
        }
        Err(e) => {
            debug!(error = %e, "access probe inconclusive");
            Some(PROBE_BANNER)
        }
    }
}
