//! Desktop site with OpenMPI 5.0.5.
//!
//! OpenMPI 5 no longer exposes a `headers` property in Spack, which the fftw
//! recipe expects, so the external entry carries `headers` and `libs` through
//! `extra_attributes`.

mod common;

use clap::Parser;
use serde_json::json;
use spack_site::{CompilerSpec, ExternalPackage, ModuleTypeSpec, ProviderSpec, Site};

const OPENMPI_PREFIX: &str = "/opt/spack/linux-ubuntu22.04-skylake/gcc-11.4.0/openmpi-5.0.5-zaxpym3yhy72maxfltpgkwl7mpxztpjn";

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let args = common::OutputArgs::parse();

    let mut site = Site::new("alta");
    site.packages.add_provider(&ProviderSpec {
        provider_name: "mpi".into(),
        library_name: "openmpi".into(),
        library_version: "5.0.5".into(),
        buildable: false,
    });
    site.packages.add_compiler("gcc", "11.4.0");
    site.packages.add_package(&ExternalPackage {
        name: "openmpi".into(),
        spec: "openmpi@5.0.5%gcc@11.4.0".into(),
        prefix: OPENMPI_PREFIX.into(),
        modules: vec!["openmpi/5.0.5".into()],
        extra_attributes: serde_json::from_value(json!({
            "headers": format!("{OPENMPI_PREFIX}/include"),
            "libs": format!("{OPENMPI_PREFIX}/lib/libmpi.so")
        }))?,
        ..ExternalPackage::default()
    });

    site.compilers.add_compiler(&CompilerSpec {
        spec: "gcc@11.4.0".into(),
        paths: serde_json::from_value(json!({
            "cc": "/usr/bin/gcc",
            "cxx": "/usr/bin/g++",
            "f77": "/usr/bin/gfortran",
            "fc": "/usr/bin/gfortran"
        }))?,
        operating_system: "ubuntu22.04".into(),
        target: "x86_64".into(),
        modules: Some(Vec::new()),
        environment: Some(serde_json::Map::new()),
        extra_rpaths: Some(Vec::new()),
        ..CompilerSpec::default()
    });

    site.modules.add_module_type(&ModuleTypeSpec {
        module_type: "lmod".into(),
        autoload: "run".into(),
        hash_length: 0,
        hide_implicits: true,
        include: vec!["python".into(), "openmpi".into()],
        ..ModuleTypeSpec::default()
    });

    site.config.set_build_jobs(8);

    site.write(&args.out_dir)?;
    Ok(())
}
