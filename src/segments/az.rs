use crate::config::{Property, SegmentProperties};
use crate::environment::Environment;
use crate::segments::Segment;
use crate::utils::debug_with_context;
use std::cell::OnceCell;

pub const SUBSCRIPTION_NAME_ENV_VAR: &str = "AZ_SUBSCRIPTION_NAME";
pub const SUBSCRIPTION_ID_ENV_VAR: &str = "AZ_SUBSCRIPTION_ID";

const AZ_COMMAND: &str = "az";
const AZ_ACCOUNT_ARGS: [&str; 4] = ["account", "show", "--query=[name,id]", "-o=tsv"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionInfo {
    pub name: String,
    pub id: String,
}

impl SubscriptionInfo {
    fn is_empty(&self) -> bool {
        self.name.is_empty() && self.id.is_empty()
    }

    /// Parse `az account show -o=tsv` output: name on the first line, id on the second.
    pub fn from_tsv(output: &str) -> Option<Self> {
        let mut lines = output.split('\n');
        let name = lines.next()?;
        let id = lines.next()?;
        Some(Self {
            name: name.trim_end_matches('\r').to_string(),
            id: id.trim_end_matches('\r').to_string(),
        })
    }
}

/// Active Azure subscription, read from `AZ_SUBSCRIPTION_*` or the `az` CLI.
pub struct AzSegment<'a> {
    env: &'a dyn Environment,
    props: &'a dyn SegmentProperties,
    info: OnceCell<Option<SubscriptionInfo>>,
}

impl<'a> AzSegment<'a> {
    pub fn new(env: &'a dyn Environment, props: &'a dyn SegmentProperties) -> Self {
        Self {
            env,
            props,
            info: OnceCell::new(),
        }
    }

    /// Subscription for this render, looked up at most once.
    pub fn subscription(&self) -> Option<&SubscriptionInfo> {
        self.info.get_or_init(|| self.load_subscription()).as_ref()
    }

    fn load_subscription(&self) -> Option<SubscriptionInfo> {
        let mut info = SubscriptionInfo {
            name: self.env.getenv(SUBSCRIPTION_NAME_ENV_VAR).unwrap_or_default(),
            id: self.env.getenv(SUBSCRIPTION_ID_ENV_VAR).unwrap_or_default(),
        };

        if (info.name.is_empty() || info.id.is_empty()) && self.env.has_command(AZ_COMMAND) {
            match self.env.run_command(AZ_COMMAND, &AZ_ACCOUNT_ARGS) {
                Ok(output) if !output.is_empty() => match SubscriptionInfo::from_tsv(&output) {
                    Some(parsed) => info = parsed,
                    None => {
                        debug_with_context("az", "Unexpected output from az account show");
                        return None;
                    }
                },
                Ok(_) => debug_with_context("az", "az account show returned nothing"),
                Err(e) => debug_with_context("az", &format!("az account show failed: {}", e)),
            }
        }

        if info.is_empty() {
            debug_with_context("az", "No active subscription");
            return None;
        }

        debug_with_context("az", &format!("Subscription: name={:?}, id={:?}", info.name, info.id));
        Some(info)
    }

    fn text(&self) -> Option<String> {
        let info = self.subscription()?;

        let separator = self.props.get_string(Property::SubscriptionInfoSeparator, " | ");
        let display_name = self.props.get_bool(Property::DisplaySubscriptionName, true);
        let display_id = self.props.get_bool(Property::DisplaySubscriptionId, false);

        let text = match (display_name, display_id) {
            (true, true) => format!("{}{}{}", info.name, separator, info.id),
            (true, false) => info.name.clone(),
            (false, true) => info.id.clone(),
            (false, false) => String::new(),
        };

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl Segment for AzSegment<'_> {
    fn enabled(&self) -> bool {
        self.text().is_some()
    }

    fn string(&self) -> String {
        self.text().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "az"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_id_lines() {
        let info = SubscriptionInfo::from_tsv("foo\nbar\n").unwrap();
        assert_eq!(info.name, "foo");
        assert_eq!(info.id, "bar");
    }

    #[test]
    fn strips_carriage_returns() {
        let info = SubscriptionInfo::from_tsv("foo\r\nbar\r\n").unwrap();
        assert_eq!(info, SubscriptionInfo { name: "foo".into(), id: "bar".into() });
    }

    #[test]
    fn single_line_is_rejected() {
        assert_eq!(SubscriptionInfo::from_tsv("foo"), None);
    }
}
