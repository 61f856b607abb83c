use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "help",
};

/// Render the command catalog grouped by category.
pub fn run() -> String {
    let commands = sorted_commands();
    let mut lines = vec!["Available Commands".to_owned()];
    let mut current_category = "";

    for command in commands {
        if command.category != current_category {
            current_category = command.category;
            lines.push(String::new());
            lines.push(format!("{current_category}:"));
        }
        lines.push(format!("  {:<16} {}", command.usage, command.desc));
    }

    lines.push(String::new());
    lines.push("Bare page numbers and `‹`/`›` act like clicking the pager.".to_owned());
    lines.join("\n")
}

fn sorted_commands() -> Vec<&'static CommandMeta> {
    let mut sorted: Vec<&'static CommandMeta> = COMMANDS.iter().collect();

    sorted.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_commands_by_category() {
        let out = run();
        let recipes_at = out.find("recipes:").unwrap();
        let utility_at = out.find("utility:").unwrap();
        assert!(recipes_at < utility_at);
        assert!(out.contains("show <id>"));
        assert!(out.contains("Lists out all available commands."));
    }
}
