use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "quit",
    desc: "Leave the recipe browser.",
    category: "utility",
    usage: "quit",
};
