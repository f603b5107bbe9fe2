//! In-flight quote fetches.
//!
//! Requests are never cancelled; instead every issue gets a monotonically
//! increasing sequence number and arrivals older than the newest issue are
//! dropped on the floor. A slow early response can therefore never overwrite
//! state belonging to a later navigation action.

use poll_promise::Promise;

use crate::{
    config::{CandleResolution, RangePreset},
    data::{QuoteProvider, RawQuoteSeries, YahooProvider},
    error::QuoteError,
};

#[cfg(debug_assertions)]
use crate::config::DF;

pub(crate) struct QuoteOutcome {
    pub seq: u64,
    pub symbol: String,
    pub result: Result<RawQuoteSeries, QuoteError>,
}

#[derive(Default)]
pub(crate) struct QuoteFetcher {
    next_seq: u64,
    newest: u64,
    in_flight: Vec<InFlight>,
}

struct InFlight {
    seq: u64,
    promise: Promise<QuoteOutcome>,
}

impl QuoteFetcher {
    /// Kick off one background fetch. The promise runs the request on its
    /// own thread with a single-shot runtime, so the GUI thread never blocks.
    pub(crate) fn issue(
        &mut self,
        symbol: String,
        range: RangePreset,
        resolution: CandleResolution,
    ) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.newest = seq;

        #[cfg(debug_assertions)]
        if DF.log_fetches {
            log::info!("quote fetch #{seq}: {symbol} {range} {resolution}");
        }

        let promise = Promise::spawn_thread("quote-fetch", move || {
            let result = fetch_blocking(&symbol, range, resolution);
            QuoteOutcome { seq, symbol, result }
        });
        self.in_flight.push(InFlight { seq, promise });
    }

    /// Collect finished fetches. At most the newest-sequence outcome is
    /// handed back; anything older is stale and gets discarded.
    pub(crate) fn poll(&mut self) -> Option<QuoteOutcome> {
        if self.in_flight.is_empty() {
            return None;
        }

        let mut delivered = None;
        let mut pending = Vec::with_capacity(self.in_flight.len());

        for flight in self.in_flight.drain(..) {
            let seq = flight.seq;
            match flight.promise.try_take() {
                Ok(outcome) => {
                    if outcome.seq == self.newest {
                        delivered = Some(outcome);
                    } else {
                        #[cfg(debug_assertions)]
                        if DF.log_fetches {
                            log::info!(
                                "dropping stale quote response #{} (newest is #{})",
                                outcome.seq,
                                self.newest
                            );
                        }
                    }
                }
                Err(promise) => pending.push(InFlight { seq, promise }),
            }
        }

        self.in_flight = pending;
        delivered
    }

    pub(crate) fn in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }
}

fn fetch_blocking(
    symbol: &str,
    range: RangePreset,
    resolution: CandleResolution,
) -> Result<RawQuoteSeries, QuoteError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| QuoteError::Worker(e.to_string()))?;

    runtime.block_on(async {
        let provider = YahooProvider::new()?;
        provider.fetch_series(symbol, range, resolution).await
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(seq: u64, symbol: &str) -> InFlight {
        InFlight {
            seq,
            promise: Promise::from_ready(QuoteOutcome {
                seq,
                symbol: symbol.into(),
                result: Ok(RawQuoteSeries::default()),
            }),
        }
    }

    #[test]
    fn only_the_newest_sequence_is_delivered() {
        let mut fetcher = QuoteFetcher::default();
        fetcher.next_seq = 2;
        fetcher.newest = 1;
        fetcher.in_flight.push(ready(0, "OLD"));
        fetcher.in_flight.push(ready(1, "NEW"));

        let outcome = fetcher.poll().unwrap();
        assert_eq!(outcome.seq, 1);
        assert_eq!(outcome.symbol, "NEW");
        assert!(!fetcher.in_flight());
    }

    #[test]
    fn a_lone_stale_arrival_is_swallowed() {
        // The newer request is still airborne when the older one lands.
        let mut fetcher = QuoteFetcher::default();
        fetcher.next_seq = 2;
        fetcher.newest = 1;
        fetcher.in_flight.push(ready(0, "OLD"));

        assert!(fetcher.poll().is_none());
        assert!(!fetcher.in_flight());
    }

    #[test]
    fn poll_on_idle_fetcher_is_none() {
        let mut fetcher = QuoteFetcher::default();
        assert!(fetcher.poll().is_none());
        assert!(!fetcher.in_flight());
    }
}
