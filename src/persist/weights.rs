use std::io;

use crate::layers::layer::Layer;
use crate::tensor::tensor::Tensor;

/// Serializes the model's parameters, in `params()` order, to a
/// pretty-printed JSON file.
pub fn save_weights(model: &dyn Layer, path: &str) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &model.params())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Loads parameters saved by `save_weights` into a freshly constructed
/// model of the same architecture.
///
/// Saved tensors are matched by position against `params()` and
/// shape-checked before anything is assigned; a count or shape mismatch
/// (say, loading a deep network's weights into a shallow one) is
/// reported as `InvalidData` rather than applied partially.
pub fn load_weights(model: &mut dyn Layer, path: &str) -> io::Result<()> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let weights: Vec<Tensor> =
        serde_json::from_reader(reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    {
        let params = model.params();
        if params.len() != weights.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "model has {} parameter tensors, file holds {}",
                    params.len(),
                    weights.len()
                ),
            ));
        }
        for (param, weight) in params.iter().zip(weights.iter()) {
            if param.shape() != weight.shape() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "parameter shape {:?} does not match saved shape {:?}",
                        param.shape(),
                        weight.shape()
                    ),
                ));
            }
        }
    }

    for ((param, _), weight) in model.params_and_grads().into_iter().zip(weights) {
        *param = weight;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::activations::Sigmoid;
    use crate::layers::linear::Linear;
    use crate::layers::sequential::Sequential;
    use crate::tensor::init::InitScheme;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir().join(name).to_str().unwrap().to_owned()
    }

    #[test]
    fn round_trip_preserves_outputs() {
        let path = temp_path("graphite_nn_round_trip.json");

        let mut rng = StdRng::seed_from_u64(0);
        let mut net = Sequential::new(vec![
            Box::new(Linear::new(3, 2, InitScheme::Normal, &mut rng)),
            Box::new(Sigmoid::new()),
        ]);
        save_weights(&net, &path).unwrap();

        // Different seed, so the fresh weights disagree until loaded.
        let mut rng = StdRng::seed_from_u64(99);
        let mut restored = Sequential::new(vec![
            Box::new(Linear::new(3, 2, InitScheme::Normal, &mut rng)),
            Box::new(Sigmoid::new()),
        ]);
        load_weights(&mut restored, &path).unwrap();

        let input = Tensor::from(vec![0.1, -0.2, 0.3]);
        assert_eq!(net.forward(&input), restored.forward(&input));
    }

    #[test]
    fn mismatched_architecture_is_rejected() {
        let path = temp_path("graphite_nn_mismatch.json");

        let mut rng = StdRng::seed_from_u64(0);
        let saved = Linear::new(2, 2, InitScheme::Uniform, &mut rng);
        save_weights(&saved, &path).unwrap();

        let mut wider = Linear::new(3, 2, InitScheme::Uniform, &mut rng);
        let err = load_weights(&mut wider, &path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
