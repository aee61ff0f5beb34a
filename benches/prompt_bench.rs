use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prompt_powerline::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Environment with everything answered from memory, so the benchmark
/// measures segment evaluation and painting rather than process spawns.
struct StaticEnvironment {
    vars: HashMap<&'static str, &'static str>,
}

impl Environment for StaticEnvironment {
    fn getenv(&self, key: &str) -> Option<String> {
        self.vars.get(key).map(|value| value.to_string())
    }

    fn has_command(&self, command: &str) -> bool {
        command == "git" || command == "az"
    }

    fn run_command(&self, command: &str, args: &[&str]) -> Result<String, CommandError> {
        match (command, args.last()) {
            ("git", Some(&"HEAD")) if args.contains(&"--short") => Ok("a1b2c3d\n".to_string()),
            ("git", Some(&"HEAD")) => Ok("main\n".to_string()),
            ("az", _) => Ok("Production\n00000000-0000-0000-0000-000000000000\n".to_string()),
            _ => Err(CommandError::NotFound(command.to_string())),
        }
    }

    fn current_dir(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/home/user/projects/prompt-powerline"))
    }
}

fn benchmark_prompt(c: &mut Criterion) {
    let config = Config::default();

    let from_env = StaticEnvironment {
        vars: HashMap::from([
            ("TERM", "xterm-256color"),
            ("AZ_SUBSCRIPTION_NAME", "Production"),
            ("AZ_SUBSCRIPTION_ID", "00000000-0000-0000-0000-000000000000"),
        ]),
    };
    c.bench_function("prompt_env_subscription", |b| {
        b.iter(|| black_box(generate_prompt(black_box(&config), &from_env)))
    });

    let from_cli = StaticEnvironment {
        vars: HashMap::from([("NO_COLOR", "1")]),
    };
    c.bench_function("prompt_cli_subscription", |b| {
        b.iter(|| black_box(generate_prompt(black_box(&config), &from_cli)))
    });
}

fn benchmark_az_segment(c: &mut Criterion) {
    let env = StaticEnvironment {
        vars: HashMap::new(),
    };
    let props = Properties::new()
        .with(Property::DisplaySubscriptionId, true)
        .with(Property::SubscriptionInfoSeparator, "$");

    c.bench_function("az_segment_render", |b| {
        b.iter(|| {
            let segment = AzSegment::new(&env, &props);
            black_box(segment.enabled() && !segment.string().is_empty())
        })
    });
}

criterion_group!(benches, benchmark_prompt, benchmark_az_segment);
criterion_main!(benches);
