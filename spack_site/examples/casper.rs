//! Site for the Casper analysis cluster: OpenMPI 4.1.6 built with CUDA,
//! external autoconf and ecFlow installs, GCC 12.2.0, Lmod with Python
//! included and ecFlow excluded.

mod common;

use clap::Parser;
use serde_json::json;
use spack_site::{CompilerSpec, ExternalPackage, ModuleTypeSpec, ProviderSpec, Site};

const GCC_ROOT: &str = "/glade/u/apps/casper/23.10/spack/opt/spack/gcc/12.2.0/pucl/bin";

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let args = common::OutputArgs::parse();

    let mut site = Site::new("casper");
    site.packages.add_provider(&ProviderSpec {
        provider_name: "mpi".into(),
        library_name: "openmpi".into(),
        library_version: "4.1.6".into(),
        buildable: false,
    });
    site.packages.add_compiler("gcc", "12.2.0");

    for package in packages() {
        site.packages.add_package(&package);
    }

    site.compilers.add_compiler(&CompilerSpec {
        spec: "gcc@12.2.0".into(),
        paths: serde_json::from_value(json!({
            "cc": format!("{GCC_ROOT}/gcc"),
            "cxx": format!("{GCC_ROOT}/g++"),
            "f77": format!("{GCC_ROOT}/gfortran"),
            "fc": format!("{GCC_ROOT}/gfortran")
        }))?,
        operating_system: "opensuse15".into(),
        target: "x86_64".into(),
        modules: Some(vec!["gcc/12.2.0".into()]),
        environment: Some(serde_json::Map::new()),
        extra_rpaths: Some(Vec::new()),
        ..CompilerSpec::default()
    });

    site.modules.add_module_type(&ModuleTypeSpec {
        module_type: "lmod".into(),
        autoload: "run".into(),
        hash_length: 0,
        hide_implicits: true,
        include: vec!["python".into()],
        exclude: vec!["ecflow".into()],
    });

    site.config.set_build_jobs(4);

    site.write(&args.out_dir)?;
    Ok(())
}

fn packages() -> Vec<ExternalPackage> {
    vec![
        ExternalPackage {
            name: "openmpi".into(),
            spec: "openmpi@4.1.6%gcc@12.2.0+cuda~cxx~cxx_exceptions~java+lustre~memchecker+pmi+static~wrapper-rpath fabrics=ucx schedulers=tm".into(),
            prefix: "/glade/u/apps/casper/23.10/spack/opt/spack/openmpi/4.1.6/gcc/12.2.0/yia4".into(),
            modules: vec!["openmpi/4.1.6".into(), "ucx/1.14.1".into(), "cuda/12.2.0".into()],
            ..ExternalPackage::default()
        },
        ExternalPackage {
            name: "autoconf".into(),
            spec: "autoconf@2.71".into(),
            buildable: true,
            prefix: "/glade/u/apps/casper/23.10/opt/view".into(),
            ..ExternalPackage::default()
        },
        ExternalPackage {
            name: "ecflow".into(),
            spec: "ecflow@5.8.4+ui+static_boost".into(),
            prefix: "/glade/work/epicufsrt/contrib/spack-stack/casper/ecflow-5.8.4".into(),
            modules: vec!["ecflow/5.8.4".into()],
            override_existing: true,
            ..ExternalPackage::default()
        },
    ]
}
