use symcalc::{differentiate, parse_expr, pretty, simplify};

fn main() {
    match parse_expr("sin(x) * x") {
        Ok(expr) => match differentiate(&expr) {
            Ok(derivative) => println!("{}", pretty(&simplify(&derivative))),
            Err(err) => eprintln!("differentiation error: {err}"),
        },
        Err(err) => eprintln!("parse error: {err}"),
    }
}
