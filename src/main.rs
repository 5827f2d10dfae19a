use numkit::configuration::Configuration;
use numkit::manager::managererror::ManagerError;
use numkit::math::scalar::Scalar;

const CONFIG_JSON: &str = r#"{
    "integral": [
        {"name": "RiemannFine", "rule": "riemann_sum", "step": 1e-4},
        {"name": "Simpson", "rule": "simpsons_rule", "step": 1e-3}
    ],
    "derivative": [
        {"name": "Central", "scheme": "symmetric_first", "step": 1e-5},
        {"name": "Curvature", "scheme": "central_second", "step": 1e-4}
    ],
    "optimization": [
        {"name": "Golden", "tolerance": 1e-9}
    ]
}"#;

fn main() -> Result<(), ManagerError> {
    tracing_subscriber::fmt::init();

    let config: Configuration<f64> = Configuration::new();
    config.from_json_str(CONFIG_JSON)?;

    let pi = f64::pi();
    for name in ["RiemannFine", "Simpson"] {
        let integrator = config.integrator(name)?;
        println!("{}: integral of sin over [0, pi] = {}", name, integrator.integrate(0.0, pi, &f64::sin));
    }

    let euler = f64::euler_number();
    for name in ["Central", "Curvature"] {
        let differentiator = config.differentiator(name)?;
        println!("{}: derivative of exp at 1 = {} (e = {})", name, differentiator.differentiate(1.0, &f64::exp), euler);
    }

    let search = config.minimizer("Golden")?;
    let bracket = search.bracket(0.0, 2.0, &|x: f64| -x * (-x).exp());
    println!(
        "Golden: argmin of -x*exp(-x) on [0, 2] = {} after {} iterations",
        bracket.midpoint(),
        bracket.iterations()
    );
    Ok(())
}
