use {
    super::{postprocess, preprocess},
    crate::{Landmarks, PoseError, PoseSource},
    base::Tensor,
    image::Image,
    ndarray::ArrayD,
    ort::{
        inputs,
        session::{Session, builder::SessionBuilder},
        value::TensorRef,
    },
    std::path::Path,
};

const DEFAULT_CONF_THRESHOLD: f32 = 0.5;

/// YOLO-pose estimator keeping the single most confident person.
pub struct YoloPose {
    session: Session,
    input_name: String,
    output_name: String,
    conf_threshold: f32,
}

impl YoloPose {
    /// Load an ONNX model from disk. Runs on CUDA device 0 when built with
    /// the `cuda` feature, on the CPU otherwise.
    pub fn new(model: impl AsRef<Path>) -> Result<Self, PoseError> {
        let model = model.as_ref();
        let builder = Session::builder()
            .map_err(|e| PoseError::Backend(format!("failed to create session builder: {}", e)))?;
        let session = with_execution_provider(builder)?
            .commit_from_file(model)
            .map_err(|e| {
                PoseError::ModelLoad(format!("failed to load {}: {}", model.display(), e))
            })?;

        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or_else(|| PoseError::ModelLoad("model has no inputs".to_string()))?;
        let output_name = session
            .outputs()
            .first()
            .map(|output| output.name().to_string())
            .ok_or_else(|| PoseError::ModelLoad("model has no outputs".to_string()))?;
        log::info!(
            "loaded pose model {} (input {}, output {})",
            model.display(),
            input_name,
            output_name
        );

        Ok(Self {
            session,
            input_name,
            output_name,
            conf_threshold: DEFAULT_CONF_THRESHOLD,
        })
    }

    pub fn with_conf_threshold(mut self, threshold: f32) -> Self {
        self.conf_threshold = threshold;
        self
    }

    fn run(&mut self, input: Tensor<f32>) -> Result<Tensor<f32>, PoseError> {
        let array = ArrayD::from_shape_vec(input.shape, input.data)
            .map_err(|e| PoseError::Backend(format!("failed to create input array: {}", e)))?;
        let tensor_ref = TensorRef::from_array_view(array.view())
            .map_err(|e| PoseError::Backend(format!("failed to create tensor ref: {}", e)))?;
        let outputs = self
            .session
            .run(inputs![self.input_name.as_str() => tensor_ref])
            .map_err(|e| PoseError::Backend(format!("inference failed: {}", e)))?;

        let array = outputs[self.output_name.as_str()]
            .try_extract_array::<f32>()
            .map_err(|e| PoseError::Backend(format!("output is not f32: {}", e)))?;
        let shape = array.shape().to_vec();
        let data = array.iter().copied().collect();
        Ok(Tensor::new(shape, data)?)
    }
}

#[cfg(feature = "cuda")]
fn with_execution_provider(builder: SessionBuilder) -> Result<SessionBuilder, PoseError> {
    use ort::execution_providers::{CUDAExecutionProvider, ExecutionProvider};
    let ep = CUDAExecutionProvider::default().with_device_id(0);
    let available = ep.is_available().unwrap_or(false);
    log::info!("CUDA execution provider requested (device 0), available: {}", available);
    builder
        .with_execution_providers([ep.build()])
        .map_err(|e| PoseError::Backend(format!("failed to register CUDA provider: {}", e)))
}

#[cfg(not(feature = "cuda"))]
fn with_execution_provider(builder: SessionBuilder) -> Result<SessionBuilder, PoseError> {
    log::info!("using CPU execution provider");
    Ok(builder)
}

impl PoseSource for YoloPose {
    fn detect(&mut self, image: &Image) -> Result<Option<Landmarks>, PoseError> {
        let (input, letterbox) = preprocess(image)?;
        let output = self.run(input)?;
        postprocess(&output, &letterbox, image.size, self.conf_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_provider_registers_on_builder() {
        let builder = Session::builder().unwrap();
        assert!(with_execution_provider(builder).is_ok());
    }

    #[test]
    fn test_missing_model_is_a_load_error() {
        let path = std::env::temp_dir().join("motion-game-missing-model.onnx");
        match YoloPose::new(&path) {
            Err(PoseError::ModelLoad(message)) => assert!(message.contains("missing-model")),
            Err(other) => panic!("expected ModelLoad, got {:?}", other),
            Ok(_) => panic!("expected an error"),
        }
    }
}
