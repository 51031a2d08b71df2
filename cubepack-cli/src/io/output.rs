use cubepack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::CubepackConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct PackOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: CubepackConfig,
}
