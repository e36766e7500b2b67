//! Minimal desktop site: MPICH from the system, GCC 11.4.0, Lmod modules.
//!
//! ```text
//! cargo run --example basic -- --out-dir /tmp/sites
//! ```

mod common;

use clap::Parser;
use spack_site::{CompilerSpec, ExternalPackage, ModuleTypeSpec, ProviderSpec, Site};

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let args = common::OutputArgs::parse();

    let mut site = Site::new("basic");
    site.packages.add_provider(&ProviderSpec {
        provider_name: "mpi".into(),
        library_name: "mpich".into(),
        library_version: "4.0".into(),
        buildable: false,
    });
    site.packages.add_compiler("gcc", "11.4.0");
    site.packages.add_package(&ExternalPackage {
        name: "mpich".into(),
        spec: "mpich@4.0".into(),
        prefix: "/usr".into(),
        ..ExternalPackage::default()
    });

    site.compilers.add_compiler(&CompilerSpec {
        spec: "gcc@11.4.0".into(),
        paths: serde_json::from_value(serde_json::json!({
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
        ..ModuleTypeSpec::default()
    });

    site.write(&args.out_dir)?;
    Ok(())
}
