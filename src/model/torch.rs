use anyhow::{bail, Context, Result};
use std::path::Path;
use tch::{kind::Kind, CModule, Device, IndexOp, Tensor};

use super::tabular::{positive_from_scores, TabularMeta};
use super::Classifier;
use crate::types::{EncodedFeatures, Prediction};

pub struct TorchModel {
    model: CModule,
    device: Device,
    meta: TabularMeta,
    pub n_out: i64, // 1 (positive logit) or 2 (per-class scores)
}

impl TorchModel {
    pub fn new(model_path: &Path, meta_path: &Path) -> Result<Self> {
        let device = Device::Cpu;

        // Load meta.json to get column ordering
        let meta = TabularMeta::load(meta_path)?;

        let model = CModule::load_on_device(model_path, device)
            .with_context(|| format!("failed to load TorchScript {}", model_path.display()))?;

        // Probe output shape with a dummy forward: expect [1, 1] or [1, 2]
        let dummy = Tensor::zeros([1, meta.feat_list.len() as i64], (Kind::Float, device));
        let t = model.forward_ts(&[dummy])?;
        let sz = t.size();
        if sz.len() != 2 || sz[0] != 1 || !(sz[1] == 1 || sz[1] == 2) {
            bail!("unexpected model output size: {:?}", sz);
        }

        Ok(Self {
            model,
            device,
            meta,
            n_out: sz[1],
        })
    }
}

impl Classifier for TorchModel {
    fn predict_proba(&self, row: &EncodedFeatures) -> Result<Prediction> {
        let x = self.meta.encode_row(row)?;
        let input = Tensor::from_slice(&x)
            .reshape([1, self.meta.feat_list.len() as i64])
            .to_device(self.device);

        let t = self.model.forward_ts(&[input])?.to_kind(Kind::Float);
        let scores: Vec<f64> = (0..self.n_out)
            .map(|j| t.i((0, j)).double_value(&[]))
            .collect();

        Ok(Prediction::from_positive(positive_from_scores(&scores)?))
    }

    fn describe(&self) -> String {
        format!(
            "torchscript model, {} columns, {} outputs",
            self.meta.feat_list.len(),
            self.n_out
        )
    }
}
