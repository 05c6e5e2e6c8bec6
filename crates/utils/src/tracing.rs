// Copyright 2023-2025 Irreducible Inc.

use tracing_subscriber::{
	fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::env::boolean_env_flag_set;

/// Environment flag that turns on span close events, which carry busy/idle timings.
pub const LOG_SPANS_FLAG: &str = "PERMRANK_LOG_SPANS";

/// Installs the global `tracing` subscriber used by the permrank binaries.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Calling this more than once is harmless;
/// later calls leave the first subscriber in place.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let span_events = if boolean_env_flag_set(LOG_SPANS_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(false)
				.with_span_events(span_events),
		)
		.try_init();
}
