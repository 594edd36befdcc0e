//! Entry point for Bestiary.
//! Runs the factory and prototype demonstrations and prints their lines.

mod demo;

use anyhow::Result;
use corelib::EnemyKind;

use crate::demo::Demo;

fn parse_demo_arg(args: &[String]) -> Demo {
    // Accept: --demo=factory|prototype|all
    let mut demo = Demo::All;
    for arg in args {
        if let Some(val) = arg.strip_prefix("--demo=") {
            demo = match val.to_ascii_lowercase().as_str() {
                "factory" => Demo::Factory,
                "prototype" | "clone" => Demo::Prototype,
                "all" => Demo::All,
                other => {
                    log::warn!("Unknown demo '{}', falling back to all.", other);
                    Demo::All
                }
            };
        }
    }
    demo
}

fn parse_enemy_args(args: &[String]) -> Vec<String> {
    // --enemy=<tag>, repeatable. Tags are passed through untouched so the
    // factory decides what is valid.
    let tags: Vec<String> = args
        .iter()
        .filter_map(|arg| arg.strip_prefix("--enemy="))
        .map(str::to_owned)
        .collect();

    if tags.is_empty() {
        EnemyKind::ALL.iter().map(|k| k.tag().to_owned()).collect()
    } else {
        tags
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let chosen = parse_demo_arg(&args);
    let tags = parse_enemy_args(&args);
    log::info!("Starting Bestiary. Demo: {:?}, enemies={:?}", chosen, tags);

    if chosen.runs_factory() {
        for line in demo::factory_demo(tags.as_slice())? {
            println!("{line}");
        }
    }

    if chosen.runs_prototype() {
        for line in demo::prototype_demo() {
            println!("{line}");
        }
    }

    log::info!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn demo_defaults_to_all() {
        assert_eq!(parse_demo_arg(&[]), Demo::All);
        assert_eq!(parse_demo_arg(&args(&["--demo=bogus"])), Demo::All);
    }

    #[test]
    fn demo_flag_is_case_insensitive() {
        assert_eq!(parse_demo_arg(&args(&["--demo=Factory"])), Demo::Factory);
        assert_eq!(parse_demo_arg(&args(&["--demo=prototype"])), Demo::Prototype);
    }

    #[test]
    fn enemy_tags_default_to_every_kind() {
        assert_eq!(parse_enemy_args(&[]), vec!["goblin", "troll"]);
    }

    #[test]
    fn enemy_tags_are_kept_verbatim_and_in_order() {
        let tags = parse_enemy_args(&args(&["--enemy=troll", "--demo=factory", "--enemy=GOBLIN"]));
        assert_eq!(tags, vec!["troll", "GOBLIN"]);
    }
}
