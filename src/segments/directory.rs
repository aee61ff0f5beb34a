use crate::config::{Property, SegmentProperties};
use crate::environment::Environment;
use crate::segments::Segment;

pub struct DirectorySegment<'a> {
    env: &'a dyn Environment,
    props: &'a dyn SegmentProperties,
}

impl<'a> DirectorySegment<'a> {
    pub fn new(env: &'a dyn Environment, props: &'a dyn SegmentProperties) -> Self {
        Self { env, props }
    }

    fn text(&self) -> Option<String> {
        let current_dir = self.env.current_dir()?;

        if self.props.get_bool(Property::Basename, false) {
            // The root has no file name; fall through to the full path.
            if let Some(name) = current_dir.file_name() {
                return Some(name.to_string_lossy().into_owned());
            }
        }

        Some(current_dir.to_string_lossy().into_owned())
    }
}

impl Segment for DirectorySegment<'_> {
    fn enabled(&self) -> bool {
        self.text().is_some()
    }

    fn string(&self) -> String {
        self.text().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}
