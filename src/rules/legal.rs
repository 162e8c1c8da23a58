//! Legal command enumeration.

use super::engine::Match;
use crate::cards::CardKind;
use crate::core::{CoinSide, Command, Phase, RandomSource, Side, Target};

impl<R: RandomSource> Match<R> {
    /// Every command `side` could issue right now.
    ///
    /// Built from the same checks `apply` runs, so everything listed is
    /// accepted. Coin-flip trainers are listed once with a heads call.
    #[must_use]
    pub fn legal_commands(&self, side: Side) -> Vec<Command> {
        let mut commands = Vec::new();
        if self.phase == Phase::Ended || side != self.current {
            return commands;
        }

        if self.phase == Phase::Setup {
            if self.mulligan.offered {
                return vec![Command::AcceptMulligan, Command::DeclineMulligan];
            }
            self.push_bench_commands(side, &mut commands);
            let bench = self.players[side].bench.len();
            commands.extend((0..bench).map(|bench_index| Command::ChooseStartingActive { bench_index }));
            return commands;
        }

        let player = &self.players[side];
        let targets: Vec<Target> = player.in_play().map(|(target, _)| target).collect();

        for (hand_index, card) in player.hand.iter().enumerate() {
            let candidates: Vec<Command> = match &card.kind {
                CardKind::Pokemon(pokemon) if pokemon.is_basic() => vec![Command::Bench { hand_index }],
                CardKind::Pokemon(_) => targets
                    .iter()
                    .map(|&target| Command::Evolve { hand_index, target })
                    .collect(),
                CardKind::Energy => targets
                    .iter()
                    .map(|&target| Command::AttachEnergy { hand_index, target })
                    .collect(),
                CardKind::Supporter(trainer) => vec![Command::PlaySupporter {
                    hand_index,
                    call: trainer.requires_coin.then_some(CoinSide::Heads),
                }],
                CardKind::Item(trainer) => vec![Command::PlayItem {
                    hand_index,
                    call: trainer.requires_coin.then_some(CoinSide::Heads),
                }],
            };
            commands.extend(candidates.into_iter().filter(|command| self.check(side, command).is_ok()));
        }

        if player.active.is_none() {
            commands.extend((0..player.bench.len()).map(|bench_index| Command::Promote { bench_index }));
        }
        if self.check_attack(side).is_ok() {
            commands.push(Command::Attack);
        }
        commands.push(Command::EndTurn);
        commands
    }

    fn push_bench_commands(&self, side: Side, out: &mut Vec<Command>) {
        let hand = self.players[side].hand.len();
        out.extend(
            (0..hand)
                .map(|hand_index| Command::Bench { hand_index })
                .filter(|command| self.check(side, command).is_ok()),
        );
    }
}
