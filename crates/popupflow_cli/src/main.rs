//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `popupflow_core` linkage and print the seeded lane layout.
//! - Print what each game stage would present, or one stage by name.

use popupflow_core::{
    lane_slots, select_for_stage, AppConfig, InMemoryWindowRepository, Stage, WindowRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("popupflow_core ping={}", popupflow_core::ping());
    println!("popupflow_core version={}", popupflow_core::core_version());

    match AppConfig::from_env() {
        Ok(config) => {
            if let Err(err) = popupflow_core::init_from_config(&config) {
                eprintln!("logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    let stages = match std::env::args().nth(1) {
        Some(name) => match name.parse::<Stage>() {
            Ok(stage) => vec![stage],
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::from(2);
            }
        },
        None => Stage::ALL.to_vec(),
    };

    let store = InMemoryWindowRepository::seeded();
    log::info!(
        "event=cli_start module=cli status=ok windows={} stages={}",
        store.len(),
        stages.len()
    );

    for lane in lane_slots(store.list_windows()) {
        let priority = lane
            .priority()
            .map_or_else(|| "-".to_string(), |priority| priority.to_string());
        println!(
            "lane {} priority={} windows={}",
            lane.line,
            priority,
            lane.windows.len()
        );
    }

    for stage in stages {
        let ids: Vec<&str> = select_for_stage(store.list_windows(), stage)
            .into_iter()
            .map(|window| window.id.as_str())
            .collect();
        println!("stage {stage} ids=[{}]", ids.join(","));
    }

    ExitCode::SUCCESS
}
