use enlarge_core::tensor;
use enlarge_core::{Enlarge, EnlargeConfig, EnlargeError};

fn main() -> Result<(), EnlargeError> {
    env_logger::init();

    // 18 channels at scale 2: four full blocks plus 2 leftovers folded into
    // the last output channel.
    let input = tensor::arange::<f32>(&[1, 18, 2, 2])?;
    let mut layer = Enlarge::new(EnlargeConfig::new(4).with_parallel(true))?;

    let output = layer.forward(&input)?;
    println!("input {:?} -> output {:?}", input.shape(), output.shape());
    if let Some(geometry) = layer.geometry() {
        println!(
            "scale {}, groups {}, leftover channels {}",
            geometry.scale, geometry.group, geometry.extra
        );
    }

    let grad_output = tensor::full(output.shape(), 1.0f32)?;
    if let Some(grad_input) = layer.backward(&grad_output, true)? {
        let total: f32 = grad_input.data().iter().sum();
        println!("gradient mass preserved: {} == {}", total, grad_output.numel());
    }
    Ok(())
}
