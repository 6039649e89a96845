use crate::menu::prompt::Prompter;
use crate::{SyncContext, output, tree};
use anyhow::Result;

/// Renders the discovered file set as a tree. An empty set is informational,
/// not an error.
///
/// # Errors
///
/// This handler itself never fails; the signature matches the dispatcher.
pub fn execute<P: Prompter>(ctx: &mut SyncContext, prompter: &mut P) -> Result<()> {
    if ctx.config.files.is_empty() {
        output::print_info("no files to list");
        prompter.pause();
        return Ok(());
    }

    let mut root = tree::build_tree(&ctx.config.files);
    for line in tree::render_tree(&mut root) {
        println!("{line}");
    }
    prompter.pause();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SyncConfig;
    use crate::menu::prompt::ScriptedPrompter;
    use crate::scanner::FileRecord;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_empty_set_pauses_without_error() {
        let temp = TempDir::new().unwrap();
        let mut ctx = SyncContext {
            config_path: temp.path().join("dot.config.json"),
            home: temp.path().to_path_buf(),
            config: SyncConfig::default(),
        };
        let mut prompter = ScriptedPrompter::default();

        execute(&mut ctx, &mut prompter).unwrap();
        assert_eq!(prompter.pauses, 1);
    }

    #[test]
    fn test_listing_pauses_after_rendering() {
        let temp = TempDir::new().unwrap();
        let mut ctx = SyncContext {
            config_path: temp.path().join("dot.config.json"),
            home: temp.path().to_path_buf(),
            config: SyncConfig {
                files: vec![FileRecord {
                    directory: PathBuf::from(".config"),
                    name: "rc".to_string(),
                }],
                ..Default::default()
            },
        };
        let mut prompter = ScriptedPrompter::default();

        execute(&mut ctx, &mut prompter).unwrap();
        assert_eq!(prompter.pauses, 1);
    }
}
