use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "usage <command>",
};

/// Show usage for a specific command.
///
/// Error behavior:
/// - missing argument returns this command's usage.
/// - unknown command returns a short not-found message.
pub fn run(arg1: Option<&str>) -> String {
    let Some(raw_name) = arg1 else {
        return format!("Usage: `{}`", META.usage);
    };

    let lookup = raw_name.trim().to_ascii_lowercase();

    let Some(command) = COMMANDS.iter().find(|command| command.name == lookup) else {
        return format!("Unknown command: `{lookup}`");
    };

    format!("Usage: `{}`", command.usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_known_commands() {
        assert_eq!(run(Some("SHOW")), "Usage: `show <id>`");
        assert_eq!(run(Some("list")), "Usage: `list [page]`");
    }

    #[test]
    fn reports_missing_and_unknown() {
        assert_eq!(run(None), "Usage: `usage <command>`");
        assert_eq!(run(Some("bake")), "Unknown command: `bake`");
    }
}
