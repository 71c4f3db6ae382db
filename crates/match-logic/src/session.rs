//! Outer play-again loop over an abstract console

use rand::{Rng, SeedableRng};

use crate::error::MatchError;
use crate::game::{MatchConfig, MatchController, MatchRecord, RoundResult};
use crate::moves::{join, Move};
use crate::persona::Persona;
use crate::random::match_seed;
use crate::Side;

/// What the core needs from the surrounding program.
///
/// `read_move` should hand back one of the five legal tokens; anything else
/// aborts the session with [`MatchError::InvalidMove`].
pub trait Console {
    type Error: From<MatchError>;

    fn read_move(&mut self) -> Result<String, Self::Error>;

    fn read_yes_no(&mut self, prompt: &str) -> Result<bool, Self::Error>;

    fn display(&mut self, message: &str);

    /// Round winners and the champion. Plain display unless overridden.
    fn announce(&mut self, message: &str) {
        self.display(message);
    }
}

/// A run of matches against one persona, until the human stops
#[derive(Debug)]
pub struct Session<R> {
    controller: MatchController<R>,
    seed: Option<u64>,
    matches_started: u32,
}

impl<R: Rng + SeedableRng> Session<R> {
    pub fn new(controller: MatchController<R>) -> Self {
        Self {
            controller,
            seed: None,
            matches_started: 0,
        }
    }

    /// Every match draws from its own seed derived from `seed`
    pub fn seeded(
        config: MatchConfig,
        human_name: impl Into<String>,
        persona: Persona,
        seed: u64,
    ) -> Self {
        let rng = R::seed_from_u64(match_seed(seed, 0));
        Self {
            controller: MatchController::new(config, human_name, persona, rng),
            seed: Some(seed),
            matches_started: 0,
        }
    }

    pub fn controller(&self) -> &MatchController<R> {
        &self.controller
    }

    /// Play matches until the console declines another one
    pub fn play<C: Console>(&mut self, console: &mut C) -> Result<Vec<MatchRecord>, C::Error> {
        let mut records = Vec::new();
        loop {
            self.begin_match();
            console.display(&self.welcome());

            while !self.controller.is_complete() {
                let token = console.read_move()?;
                let human_move: Move = token.parse()?;
                let result = self.controller.play_round(human_move)?;
                self.report(console, &result);
            }

            if let Some(record) = self.controller.record() {
                records.push(record);
            }
            if !console.read_yes_no("Would you like to play again?")? {
                break;
            }
        }
        console.display("Thanks for playing Rock, Paper, Scissors, Lizard, Spock - goodbye!");
        Ok(records)
    }

    /// Every match starts blank, including the first: the controller may
    /// have been handed over mid-match or already finished.
    fn begin_match(&mut self) {
        self.controller.reset();
        if let Some(seed) = self.seed {
            self.controller
                .reseed(R::seed_from_u64(match_seed(seed, self.matches_started)));
        }
        self.matches_started += 1;
    }

    fn welcome(&self) -> String {
        let n = self.controller.config().win_threshold();
        format!(
            "Welcome to Rock, Paper, Scissors, Lizard, Spock! {} is playing {}. \
             First to {} {} is the grand champion.",
            self.controller.human().name(),
            self.controller.computer().name(),
            n,
            wins(n)
        )
    }

    fn report<C: Console>(&self, console: &mut C, result: &RoundResult) {
        let human = self.controller.human();
        let computer = self.controller.computer();

        console.display(&format!("{} chose {}.", human.name(), result.human_move));
        console.display(&format!("{} chose {}.", computer.name(), result.computer_move));
        match result.outcome.winner() {
            Some(side) => console.announce(&format!("{} won!", self.controller.player(side).name())),
            None => console.announce("It's a tie!"),
        }
        for p in [human, computer] {
            console.display(&format!("{} has {} {}.", p.name(), p.score(), wins(p.score())));
        }
        for p in [human, computer] {
            console.display(&format!("{} has played: {}", p.name(), join(p.history())));
        }

        match result.champion {
            Some(Side::Human) => console.announce(&format!(
                "Congratulations! You have {} {} - the grand champion is {}!",
                result.human_score,
                wins(result.human_score),
                human.name()
            )),
            Some(Side::Computer) => console.announce(&format!(
                "{} has {} {} - it's the grand champion. Better luck next time, human!",
                computer.name(),
                result.computer_score,
                wins(result.computer_score)
            )),
            None => {}
        }
    }
}

fn wins(n: u32) -> &'static str {
    if n == 1 {
        "win"
    } else {
        "wins"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::Droid;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Scripted {
        moves: VecDeque<&'static str>,
        answers: VecDeque<bool>,
        output: Vec<String>,
        announced: Vec<String>,
    }

    impl Scripted {
        fn new(moves: &[&'static str], answers: &[bool]) -> Self {
            Self {
                moves: moves.iter().copied().collect(),
                answers: answers.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Console for Scripted {
        type Error = MatchError;

        fn read_move(&mut self) -> Result<String, MatchError> {
            Ok(self.moves.pop_front().expect("move script exhausted").to_string())
        }

        fn read_yes_no(&mut self, _prompt: &str) -> Result<bool, MatchError> {
            Ok(self.answers.pop_front().expect("answer script exhausted"))
        }

        fn display(&mut self, message: &str) {
            self.output.push(message.to_string());
        }

        fn announce(&mut self, message: &str) {
            self.announced.push(message.to_string());
            self.display(message);
        }
    }

    fn session(threshold: u32, persona: Persona) -> Session<StdRng> {
        let controller = MatchController::new(
            MatchConfig::new(threshold).unwrap(),
            "Ada",
            persona,
            StdRng::seed_from_u64(42),
        );
        Session::new(controller)
    }

    #[test]
    fn test_single_match_then_quit() {
        let mut s = session(1, Persona::fixed("Mirror", Move::Scissors));
        let mut console = Scripted::new(&["rock"], &[false]);

        let records = s.play(&mut console).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].champion, Side::Human);
        assert_eq!((records[0].human_score, records[0].computer_score), (1, 0));

        assert!(console.output[0].starts_with("Welcome"));
        assert!(console.output[0].contains("First to 1 win "));
        assert!(console.output.contains(&"Ada chose rock.".to_string()));
        assert!(console.output.contains(&"Mirror chose scissors.".to_string()));
        assert!(console.output.contains(&"Ada has played: rock".to_string()));
        assert_eq!(
            console.announced,
            vec![
                "Ada won!".to_string(),
                "Congratulations! You have 1 win - the grand champion is Ada!".to_string(),
            ]
        );
        assert!(console.output.last().unwrap().contains("goodbye"));
    }

    #[test]
    fn test_play_again_resets_scores_and_history() {
        let mut s = session(2, Persona::fixed("Mirror", Move::Paper));
        let mut console = Scripted::new(&["rock", "rock", "scissors", "paper", "lizard"], &[true, false]);

        let records = s.play(&mut console).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].champion, Side::Computer);
        assert_eq!(records[0].rounds.len(), 2);
        assert_eq!(records[1].champion, Side::Human);
        assert_eq!(records[1].rounds.len(), 3);
        assert_eq!(records[1].rounds[0].round, 1);
        // the second match starts from zero
        assert_eq!(records[1].rounds[0].computer_score, 0);
        assert_eq!(records[1].rounds[0].human_score, 1);

        assert!(console
            .announced
            .iter()
            .any(|m| m == "Mirror has 2 wins - it's the grand champion. Better luck next time, human!"));
        let welcomes = console.output.iter().filter(|m| m.starts_with("Welcome")).count();
        assert_eq!(welcomes, 2);
        assert!(console.moves.is_empty());
    }

    #[test]
    fn test_ties_then_spock_streak() {
        let mut s = session(3, Persona::fixed("C3PO", Move::Rock));
        let mut console = Scripted::new(&["rock", "rock", "spock", "spock", "spock"], &[false]);

        let records = s.play(&mut console).unwrap();
        let rounds = &records[0].rounds;
        assert_eq!(rounds.len(), 5);
        assert_eq!(rounds[3].human_score, 2);
        assert!(!rounds[3].is_complete());
        assert_eq!(rounds[4].human_score, 3);
        assert_eq!(rounds[4].champion, Some(Side::Human));
    }

    #[test]
    fn test_out_of_alphabet_token_fails_fast() {
        let mut s = session(3, Persona::fixed("Mirror", Move::Rock));
        let mut console = Scripted::new(&["rock", "banana"], &[]);

        let err = s.play(&mut console).unwrap_err();
        assert_eq!(err, MatchError::InvalidMove("banana".into()));
        // the bad round never started
        assert_eq!(s.controller().rounds().len(), 1);
        assert_eq!(s.controller().human().history(), &[Move::Rock]);
    }

    #[test]
    fn test_finished_controller_starts_a_fresh_match() {
        let mut controller = MatchController::new(
            MatchConfig::new(1).unwrap(),
            "Ada",
            Persona::fixed("Mirror", Move::Scissors),
            StdRng::seed_from_u64(42),
        );
        controller.play_round(Move::Paper).unwrap();
        assert!(controller.is_complete());

        let mut s = Session::new(controller);
        let mut console = Scripted::new(&["rock"], &[false]);
        let records = s.play(&mut console).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].champion, Side::Human);
        assert_eq!(records[0].rounds.len(), 1);
        assert_eq!(records[0].rounds[0].human_move, Move::Rock);
        assert!(console.moves.is_empty());
    }

    #[test]
    fn test_mid_match_controller_starts_from_zero() {
        let mut controller = MatchController::new(
            MatchConfig::new(2).unwrap(),
            "Ada",
            Persona::fixed("Mirror", Move::Scissors),
            StdRng::seed_from_u64(42),
        );
        controller.play_round(Move::Rock).unwrap();
        assert_eq!(controller.human().score(), 1);

        let mut s = Session::new(controller);
        let mut console = Scripted::new(&["rock", "rock"], &[false]);
        let records = s.play(&mut console).unwrap();

        assert_eq!(records[0].rounds.len(), 2);
        assert_eq!(records[0].rounds[0].human_score, 1);
        assert_eq!(records[0].rounds[0].round, 1);
    }

    #[test]
    fn test_seeded_sessions_replay_every_match() {
        let run = || {
            let mut s: Session<StdRng> =
                Session::seeded(MatchConfig::standard(), "Ada", Droid::R2D2.persona(), 1234);
            let mut console = Scripted::new(&["lizard"; 64], &[true, false]);
            s.play(&mut console).unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.len(), 2);
        assert_eq!(a, b);

        // the second match draws from its own derived seed
        let persona = Droid::R2D2.persona();
        let mut rng = StdRng::seed_from_u64(match_seed(1234, 1));
        for round in &a[1].rounds {
            assert_eq!(round.computer_move, persona.select(&mut rng));
        }
    }
}
