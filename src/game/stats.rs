use crate::errors::SimResult;
use crate::game::events::{EventLog, GameEvent};
use crate::game::state::GameState;
use crate::player::PlayerId;
use schema::{StatKind, StatRouting};

impl GameState {
    /// Increment `stat` for `player` (if any) and the team aggregates of `team`.
    ///
    /// Runs feed the team's `pts` and the current inning's tally instead of a
    /// team `r` counter. Player-only counters stay off the team line. Every
    /// increment is mirrored as a `stat` entry in `log`.
    pub fn record_stat(
        &mut self,
        log: &mut EventLog,
        team: usize,
        player: Option<PlayerId>,
        stat: StatKind,
        amount: u32,
    ) -> SimResult<()> {
        let routing = stat.routing();

        if let Some(id) = player {
            if routing != StatRouting::TeamOnly {
                self.teams[team].player_mut(id)?.stats.add(stat, amount);
            }
        }

        let team_in_game = &mut self.teams[team];
        match routing {
            StatRouting::PlayerAndTeam => team_in_game.stats.add(stat, amount),
            StatRouting::PlayerOnly => {}
            StatRouting::Run => {
                team_in_game.stats.add(StatKind::Points, amount);
                if let Some(tally) = team_in_game.runs_by_inning.last_mut() {
                    *tally += amount;
                }
                log.push(GameEvent::Stat {
                    team,
                    player: None,
                    stat: StatKind::Points,
                    amount,
                });
            }
            StatRouting::TeamOnly => {
                team_in_game.stats.add(stat, amount);
                log.push(GameEvent::Stat {
                    team,
                    player: None,
                    stat,
                    amount,
                });
                return Ok(());
            }
        }

        if let Some(id) = player {
            log.push(GameEvent::Stat {
                team,
                player: Some(id),
                stat,
                amount,
            });
        }
        Ok(())
    }

    /// Add one to a player's counter.
    pub fn record_player_stat(
        &mut self,
        log: &mut EventLog,
        team: usize,
        player: PlayerId,
        stat: StatKind,
    ) -> SimResult<()> {
        self.record_stat(log, team, Some(player), stat, 1)
    }
}
