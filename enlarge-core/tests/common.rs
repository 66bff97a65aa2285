use enlarge_core::tensor::{self, Tensor};

/// Routes `log` output through the test harness; safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper function to create a basic tensor for testing
#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor<f64> {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn random_tensor(shape: &[usize], seed: u64) -> Tensor<f64> {
    tensor::randn(shape, seed).expect("Random tensor creation failed")
}
