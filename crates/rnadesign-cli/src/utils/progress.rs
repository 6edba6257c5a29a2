use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rnadesign::engine::progress::{Progress, ProgressCallback};
use std::cmp::Ordering;
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
struct BestDesign {
    index: usize,
    pair_energy: f64,
}

impl BestDesign {
    // Same order as `BatchResult::ranked`: energy, then batch index.
    fn beats(&self, other: &BestDesign) -> bool {
        self.pair_energy
            .total_cmp(&other.pair_energy)
            .then_with(|| self.index.cmp(&other.index))
            == Ordering::Less
    }

    fn describe(&self) -> String {
        format!(
            "best #{} at {:.2} kcal/mol",
            self.index + 1,
            self.pair_energy
        )
    }
}

/// Batch progress bar on stderr that keeps the most stable design seen so far in its message.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
    best: Arc<Mutex<Option<BestDesign>>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(Self::bar_style());
        Self {
            pb,
            best: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();
        let best = self.best.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::BatchStart { total_designs } => {
                pb.reset();
                pb.set_length(total_designs);
                pb.set_message("designing");
                if let Ok(mut best) = best.lock() {
                    *best = None;
                }
            }
            Progress::DesignComplete { index, pair_energy } => {
                let candidate = BestDesign { index, pair_energy };
                match best.lock() {
                    Ok(mut best) => {
                        if (*best).is_none_or(|current| candidate.beats(&current)) {
                            *best = Some(candidate);
                            pb.set_message(candidate.describe());
                        }
                    }
                    Err(_) => warn!("Best-design tracker mutex was poisoned."),
                }
                pb.inc(1);
            }
            Progress::BatchFinish => {
                pb.set_position(pb.length().unwrap_or(0));
                pb.finish();
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} designs  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn hidden_handler() -> CliProgressHandler {
        CliProgressHandler::with_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn message_follows_the_most_stable_design() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        callback(Progress::BatchStart { total_designs: 3 });
        assert_eq!(handler.pb.length(), Some(3));
        assert_eq!(handler.pb.message(), "designing");

        callback(Progress::DesignComplete {
            index: 2,
            pair_energy: -6.0,
        });
        assert_eq!(handler.pb.message(), "best #3 at -6.00 kcal/mol");

        callback(Progress::DesignComplete {
            index: 0,
            pair_energy: -4.0,
        });
        assert_eq!(handler.pb.message(), "best #3 at -6.00 kcal/mol");

        callback(Progress::DesignComplete {
            index: 1,
            pair_energy: -9.0,
        });
        assert_eq!(handler.pb.message(), "best #2 at -9.00 kcal/mol");
        assert_eq!(handler.pb.position(), 3);

        callback(Progress::BatchFinish);
        assert!(handler.pb.is_finished());
    }

    #[test]
    fn energy_ties_go_to_the_earlier_design() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        callback(Progress::BatchStart { total_designs: 2 });
        callback(Progress::DesignComplete {
            index: 1,
            pair_energy: -5.0,
        });
        callback(Progress::DesignComplete {
            index: 0,
            pair_energy: -5.0,
        });
        assert_eq!(handler.pb.message(), "best #1 at -5.00 kcal/mol");
    }

    #[test]
    fn a_new_batch_forgets_the_previous_best() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        callback(Progress::BatchStart { total_designs: 1 });
        callback(Progress::DesignComplete {
            index: 0,
            pair_energy: -20.0,
        });
        callback(Progress::BatchFinish);

        callback(Progress::BatchStart { total_designs: 1 });
        callback(Progress::DesignComplete {
            index: 0,
            pair_energy: -2.0,
        });
        assert_eq!(handler.pb.message(), "best #1 at -2.00 kcal/mol");
    }

    #[test]
    fn finish_fills_the_bar_and_callback_is_thread_safe() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::BatchStart { total_designs: 4 });
            callback(Progress::DesignComplete {
                index: 0,
                pair_energy: -3.0,
            });
            callback(Progress::BatchFinish);
        })
        .join()
        .unwrap();

        assert!(handler.pb.is_finished());
        assert_eq!(handler.pb.position(), 4);
    }
}
