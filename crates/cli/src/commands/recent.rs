use chipscout_core::suggestions::recent_suggestions;

use crate::commands::{load_config, open_history, CommandResult};

pub fn run() -> CommandResult {
    let config = match load_config("recent") {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let history = open_history(&config);
    let recent = recent_suggestions(history.as_ref());
    CommandResult::success_with_data("recent", format!("{} recent searches", recent.len()), &recent)
}
