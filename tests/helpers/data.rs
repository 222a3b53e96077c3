#[allow(dead_code)]
pub fn main_unit() -> &'static str {
    "let items = [1, 2, \"three\"]\nprint \"Test value: {items[2]}\"\nload \"./test.vk\"\n"
}

#[allow(dead_code)]
pub fn quiet_unit() -> &'static str {
    "let origin = \"test.vk\"\n"
}

/// Prints once per execution, so reruns show up in the output.
#[allow(dead_code)]
pub fn noisy_unit(name: &str) -> String {
    format!("let {name} = \"{name}\"\nprint \"ran {{{name}}}\"\n")
}
