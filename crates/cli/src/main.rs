use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::process;
use tracing_subscriber::fmt::SubscriberBuilder;
use trnums::prelude::*;

mod args;
mod output;
mod report;

type Terms = Box<dyn Iterator<Item = Result<BigRational, SequenceError>>>;

#[derive(Parser)]
#[command(name = "tr-nums")]
#[command(about = "Exact reciprocals of generalized triangular numbers")]
struct Cmd {
    /// Round fractions to a denominator of at most this many decimal digits
    #[arg(
        long,
        global = true,
        value_name = "DIGITS",
        conflicts_with = "float",
        value_parser = clap::value_parser!(u32).range(0..=i64::from(args::MAX_ROUND_DIGITS))
    )]
    round: Option<u32>,

    /// Print terms as floating-point decimals
    #[arg(long, global = true)]
    float: bool,

    /// Diagnostics level on stderr
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Inverse simplex numbers 1/T(n, d)
    Tr {
        #[arg(long, default_value = "1", allow_hyphen_values = true, value_parser = args::parse_rational)]
        start: BigRational,
        #[arg(long, default_value = "2", allow_hyphen_values = true, value_parser = args::parse_rational)]
        dim: BigRational,
        /// Stop after this many terms (unbounded otherwise)
        #[arg(long)]
        count: Option<usize>,
    },
    /// Gap numbers: running sums of the inverse simplex numbers from -1
    Gap {
        #[arg(long, default_value = "1", allow_hyphen_values = true, value_parser = args::parse_rational)]
        start: BigRational,
        #[arg(long, default_value = "2", allow_hyphen_values = true, value_parser = args::parse_rational)]
        dim: BigRational,
        #[arg(long)]
        count: Option<usize>,
        /// Sum the closed-form terms instead of the exact d = 2 recurrence
        #[arg(long)]
        summed: bool,
    },
    /// Print the version and Γ limits as JSON
    Report,
}

fn main() {
    if let Err(e) = run(Cmd::parse()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cmd: Cmd) -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(cmd.log_level)
        .init();
    let cfg = args::render_cfg(cmd.round, cmd.float);
    match cmd.action {
        Action::Tr { start, dim, count } => tr(start, dim, count, cfg),
        Action::Gap {
            start,
            dim,
            count,
            summed,
        } => gap(start, dim, count, summed, cfg),
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&report::report())?);
            Ok(())
        }
    }
}

fn tr(start: BigRational, dim: BigRational, count: Option<usize>, cfg: RenderCfg) -> Result<()> {
    check_position(&start).context("invalid --start")?;
    check_dimension(&dim).context("invalid --dim")?;
    tracing::info!(start = %start, dim = %dim, count = ?count, "tr");
    write_terms(Box::new(inverse_simplex_numbers(start, dim)), count, cfg)
}

fn gap(
    start: BigRational,
    dim: BigRational,
    count: Option<usize>,
    summed: bool,
    cfg: RenderCfg,
) -> Result<()> {
    check_position(&start).context("invalid --start")?;
    check_dimension(&dim).context("invalid --dim")?;
    tracing::info!(start = %start, dim = %dim, count = ?count, summed, "gap");
    let terms: Terms = if summed {
        Box::new(summed_gap_numbers(start, dim))
    } else {
        Box::new(GapNumbers::new(start, &dim).context("pass --summed for other dimensions")?)
    };
    write_terms(terms, count, cfg)
}

fn write_terms(terms: Terms, count: Option<usize>, cfg: RenderCfg) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let written = output::emit(terms, count, cfg, &mut lock)?;
    tracing::info!(written, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn parses_subcommands_and_globals() {
        let cmd = Cmd::try_parse_from(["tr-nums", "tr", "--dim", "5/2", "--round", "3"]).unwrap();
        assert_eq!(cmd.round, Some(3));
        match cmd.action {
            Action::Tr { start, dim, count } => {
                assert_eq!(start, q(1, 1));
                assert_eq!(dim, q(5, 2));
                assert!(count.is_none());
            }
            _ => panic!("expected tr"),
        }

        let cmd = Cmd::try_parse_from(["tr-nums", "gap", "--start", "-2.5", "--float"]).unwrap();
        assert!(cmd.float);
        match cmd.action {
            Action::Gap { start, dim, .. } => {
                assert_eq!(start, q(-5, 2));
                assert_eq!(dim, q(2, 1));
            }
            _ => panic!("expected gap"),
        }
    }

    #[test]
    fn round_and_float_conflict() {
        assert!(Cmd::try_parse_from(["tr-nums", "tr", "--round", "2", "--float"]).is_err());
        assert!(Cmd::try_parse_from(["tr-nums", "tr", "--dim", "x"]).is_err());
    }

    #[test]
    fn round_digits_are_bounded() {
        assert!(Cmd::try_parse_from(["tr-nums", "tr", "--round", "4000000000"]).is_err());
        assert!(Cmd::try_parse_from(["tr-nums", "tr", "--round", "1001"]).is_err());
        let cmd = Cmd::try_parse_from(["tr-nums", "tr", "--round", "1000"]).unwrap();
        assert_eq!(cmd.round, Some(args::MAX_ROUND_DIGITS));
    }

    #[test]
    fn out_flag_is_not_accepted() {
        assert!(Cmd::try_parse_from(["tr-nums", "tr", "--out", "terms.txt"]).is_err());
    }

    #[test]
    fn nonpositive_integer_inputs_are_rejected_in_one_line() {
        let cfg = RenderCfg::default();
        let err = tr(q(0, 1), q(2, 1), Some(1), cfg).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("invalid --start: "), "{message}");
        assert!(!message.contains('\n'));
        assert!(matches!(
            err.downcast_ref::<SequenceError>(),
            Some(SequenceError::InvalidInput { .. })
        ));

        let err = tr(q(1, 1), q(-3, 1), Some(1), cfg).unwrap_err();
        assert!(format!("{err:#}").starts_with("invalid --dim: "));
        assert!(gap(q(-1, 1), q(2, 1), Some(1), false, cfg).is_err());
    }

    #[test]
    fn gap_at_other_dimension_needs_summed() {
        let cfg = RenderCfg::default();
        let err = gap(q(1, 1), q(3, 1), Some(2), false, cfg).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SequenceError>(),
            Some(SequenceError::Unimplemented { .. })
        ));
    }
}
