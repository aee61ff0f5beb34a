use crate::config::{Property, SegmentProperties};
use crate::environment::Environment;
use crate::segments::Segment;
use crate::utils::debug_with_context;
use std::cell::OnceCell;

const GIT_COMMAND: &str = "git";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitInfo {
    pub branch: String,
    pub sha: Option<String>,
}

pub struct GitSegment<'a> {
    env: &'a dyn Environment,
    props: &'a dyn SegmentProperties,
    info: OnceCell<Option<GitInfo>>,
}

impl<'a> GitSegment<'a> {
    pub fn new(env: &'a dyn Environment, props: &'a dyn SegmentProperties) -> Self {
        Self {
            env,
            props,
            info: OnceCell::new(),
        }
    }

    pub fn git_info(&self) -> Option<&GitInfo> {
        self.info.get_or_init(|| self.load_git_info()).as_ref()
    }

    fn load_git_info(&self) -> Option<GitInfo> {
        if !self.env.has_command(GIT_COMMAND) {
            debug_with_context("git", "git not installed");
            return None;
        }

        let branch = match self.rev_parse(&["--abbrev-ref", "HEAD"]) {
            Some(branch) => branch,
            None => {
                debug_with_context("git", "Not in a git repository");
                return None;
            }
        };

        let sha = if self.props.get_bool(Property::DisplaySha, true) {
            self.rev_parse(&["--short", "HEAD"])
        } else {
            None
        };

        debug_with_context("git", &format!("Git info: branch={}, sha={:?}", branch, sha));
        Some(GitInfo { branch, sha })
    }

    fn rev_parse(&self, args: &[&str]) -> Option<String> {
        let mut full_args = vec!["rev-parse"];
        full_args.extend_from_slice(args);

        match self.env.run_command(GIT_COMMAND, &full_args) {
            Ok(output) => Some(output.trim().to_string()).filter(|s| !s.is_empty()),
            Err(e) => {
                debug_with_context("git", &format!("git rev-parse failed: {}", e));
                None
            }
        }
    }
}

impl Segment for GitSegment<'_> {
    fn enabled(&self) -> bool {
        self.git_info().is_some()
    }

    fn string(&self) -> String {
        let Some(info) = self.git_info() else {
            return String::new();
        };

        let mut parts = vec!["⎇".to_string(), info.branch.clone()];
        if let Some(sha) = &info.sha {
            parts.push(format!("♯{}", sha));
        }
        parts.join(" ")
    }

    fn name(&self) -> &'static str {
        "git"
    }
}
