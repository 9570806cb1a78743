use argh::FromArgs;
use std::str::FromStr;

use matalg::Matrix;

/// Operation to run on the input matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Scale,
    Transpose,
    Det,
    Inv,
    Rank,
    Trace,
    Show,
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "add" => Op::Add,
            "sub" => Op::Sub,
            "mul" => Op::Mul,
            "scale" => Op::Scale,
            "transpose" => Op::Transpose,
            "det" => Op::Det,
            "inv" => Op::Inv,
            "rank" => Op::Rank,
            "trace" => Op::Trace,
            "show" => Op::Show,
            other => return Err(format!("unknown operation '{other}'")),
        })
    }
}

#[derive(FromArgs)]
/// Run a matrix operation and print the result
struct Args {
    /// one of: add, sub, mul, scale, transpose, det, inv, rank, trace, show
    #[argh(positional)]
    op: Op,

    /// first operand, e.g. "1,2;3,4" or @matrix.json
    #[argh(option, short = 'a')]
    a: String,

    /// second operand for add, sub and mul
    #[argh(option, short = 'b')]
    b: Option<String>,

    /// scalar factor for scale
    #[argh(option, short = 'k', default = "1.0")]
    k: f64,
}

/// Read a matrix given inline or as `@path` to a JSON file.
fn load_matrix(arg: &str) -> Result<Matrix, Box<dyn std::error::Error>> {
    match arg.strip_prefix('@') {
        Some(path) => {
            log::debug!("reading matrix from {path}");
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(arg.parse()?),
    }
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let a = load_matrix(&args.a)?;
    let b = || -> Result<Matrix, Box<dyn std::error::Error>> {
        let arg = args
            .b
            .as_deref()
            .ok_or_else(|| format!("{:?} needs a second operand (-b)", args.op))?;
        load_matrix(arg)
    };

    let out = match args.op {
        Op::Add => matalg::add(&a, &b()?)?.to_string(),
        Op::Sub => matalg::sub(&a, &b()?)?.to_string(),
        Op::Mul => matalg::multiply(&a, &b()?)?.to_string(),
        Op::Scale => matalg::scale(&a, args.k).to_string(),
        Op::Transpose => matalg::transpose(&a).to_string(),
        Op::Det => format!("{}\n", matalg::determinant(&a)?),
        Op::Inv => matalg::inverse(&a)?.to_string(),
        Op::Rank => format!("{}\n", matalg::rank(&a)),
        Op::Trace => format!("{}\n", matalg::trace(&a)?),
        Op::Show => matalg::format_matrix(&a),
    };
    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    log::info!("running {:?}", args.op);
    print!("{}", run(&args)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(op: Op, a: &str, b: Option<&str>) -> Args {
        Args {
            op,
            a: a.to_string(),
            b: b.map(str::to_string),
            k: 2.0,
        }
    }

    #[test]
    fn test_parse_op() {
        assert_eq!("inv".parse::<Op>(), Ok(Op::Inv));
        assert!("invert".parse::<Op>().is_err());
    }

    #[test]
    fn test_run() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(run(&args(Op::Det, "1,2;3,4", None))?, "-2\n");
        assert_eq!(run(&args(Op::Rank, "1,2;2,4", None))?, "1\n");
        assert_eq!(
            run(&args(Op::Scale, "1,2", None))?,
            "2.00    4.00    \n"
        );
        assert_eq!(
            run(&args(Op::Mul, "1,2", Some("3;4")))?,
            "11.00   \n"
        );
        Ok(())
    }

    #[test]
    fn test_run_errors() {
        assert!(run(&args(Op::Add, "1,2;3,4", None)).is_err());
        assert!(run(&args(Op::Inv, "1,2;2,4", None)).is_err());
        assert!(run(&args(Op::Add, "1,2", Some("1;2"))).is_err());
    }

    #[test]
    fn test_load_matrix_json() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("matrix.json");
        std::fs::write(&path, r#"{"rows":1,"cols":2,"data":[5.0,6.0]}"#)?;
        let m = load_matrix(&format!("@{}", path.display()))?;
        assert_eq!(m, Matrix::from_rows(&[[5.0, 6.0]])?);
        Ok(())
    }
}
