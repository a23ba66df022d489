#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use monpoke::game::check_invariants;
use monpoke::MatchController;

/// One structured command.
#[derive(Arbitrary, Debug)]
enum Step {
    /// CREATE with small name pools so names collide.
    Create { team: u8, creature: u8, health: i8, attack: i8 },
    /// ICHOOSEYOU from the same pool.
    Choose { creature: u8 },
    /// ATTACK.
    Attack,
    /// Free-form line.
    Raw(String),
}

const TEAMS: [&str; 3] = ["Rocket", "Socket", "Sprocket"];
const MONS: [&str; 4] = ["Meekachu", "Flonyx", "Snorflax", "Clefengly"];

fuzz_target!(|steps: Vec<Step>| {
    let mut controller = MatchController::new();

    for step in steps.iter().take(256) {
        let line = match step {
            Step::Create { team, creature, health, attack } => format!(
                "CREATE {} {} {health} {attack}",
                TEAMS[usize::from(*team) % TEAMS.len()],
                MONS[usize::from(*creature) % MONS.len()],
            ),
            Step::Choose { creature } => {
                format!("ICHOOSEYOU {}", MONS[usize::from(*creature) % MONS.len()])
            }
            Step::Attack => "ATTACK".to_string(),
            Step::Raw(line) => line.clone(),
        };

        let before = controller.state().clone();
        if controller.execute_line(&line).is_err() {
            assert_eq!(controller.state(), &before, "rejected {line:?} mutated state");
        }

        let violations = check_invariants(controller.state());
        assert!(violations.is_empty(), "after {line:?}: {violations:?}");
    }
});
