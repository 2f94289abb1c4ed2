use crate::layers::layer::Layer;
use crate::tensor::tensor::Tensor;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn tanh(x: f64) -> f64 {
    // exp(-2x) overflows for very negative x; tanh is (essentially)
    // saturated well before |x| reaches 100.
    if x < -100.0 {
        -1.0
    } else if x > 100.0 {
        1.0
    } else {
        let em2x = (-2.0 * x).exp();
        (1.0 - em2x) / (1.0 + em2x)
    }
}

fn relu(x: f64) -> f64 {
    x.max(0.0)
}

/// Applies the logistic function to every element.
#[derive(Debug)]
pub struct Sigmoid {
    sigmoids: Option<Tensor>, // forward output, reused by backward
}

impl Sigmoid {
    pub fn new() -> Sigmoid {
        Sigmoid { sigmoids: None }
    }
}

impl Default for Sigmoid {
    fn default() -> Self {
        Sigmoid::new()
    }
}

impl Layer for Sigmoid {
    fn forward(&mut self, input: &Tensor) -> Tensor {
        let output = input.map(sigmoid);
        self.sigmoids = Some(output.clone());
        output
    }

    fn backward(&mut self, gradient: &Tensor) -> Tensor {
        match &self.sigmoids {
            Some(sig) => sig.zip_with(gradient, |sig, grad| sig * (1.0 - sig) * grad),
            None => panic!("Sigmoid::backward called before forward"),
        }
    }
}

/// Applies the hyperbolic tangent to every element.
#[derive(Debug)]
pub struct Tanh {
    output: Option<Tensor>, // d(tanh)/dx = 1 - tanh², so caching the output suffices
}

impl Tanh {
    pub fn new() -> Tanh {
        Tanh { output: None }
    }
}

impl Default for Tanh {
    fn default() -> Self {
        Tanh::new()
    }
}

impl Layer for Tanh {
    fn forward(&mut self, input: &Tensor) -> Tensor {
        let output = input.map(tanh);
        self.output = Some(output.clone());
        output
    }

    fn backward(&mut self, gradient: &Tensor) -> Tensor {
        match &self.output {
            Some(out) => out.zip_with(gradient, |out, grad| (1.0 - out * out) * grad),
            None => panic!("Tanh::backward called before forward"),
        }
    }
}

/// Zeroes negative elements, passes positive ones through.
#[derive(Debug)]
pub struct Relu {
    input: Option<Tensor>, // the derivative gates on the sign of the input
}

impl Relu {
    pub fn new() -> Relu {
        Relu { input: None }
    }
}

impl Default for Relu {
    fn default() -> Self {
        Relu::new()
    }
}

impl Layer for Relu {
    fn forward(&mut self, input: &Tensor) -> Tensor {
        self.input = Some(input.clone());
        input.map(relu)
    }

    fn backward(&mut self, gradient: &Tensor) -> Tensor {
        match &self.input {
            Some(input) => input.zip_with(gradient, |x, grad| if x > 0.0 { grad } else { 0.0 }),
            None => panic!("Relu::backward called before forward"),
        }
    }
}
