//! Site for the Derecho Cray system.
//!
//! Cray MPICH is wired up through modules rather than a prefix, and its
//! `mpicc` wrappers are shell scripts around a private MPI build, so the
//! generated files are a starting point that usually needs hand edits.

mod common;

use clap::Parser;
use serde_json::json;
use spack_site::{CompilerSpec, ExternalPackage, ModuleTypeSpec, ProviderSpec, Site};

const NETCDF_ROOT: &str = "/glade/u/apps/derecho/23.09/spack/opt/spack/netcdf/4.9.2/packages";

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let args = common::OutputArgs::parse();

    let mut site = Site::new("derecho");
    site.packages.add_provider(&ProviderSpec {
        provider_name: "mpi".into(),
        library_name: "cray-mpich".into(),
        library_version: "8.1.25".into(),
        buildable: false,
    });

    site.packages.add_package(&ExternalPackage {
        name: "cray-mpich".into(),
        spec: "cray-mpich@8.1.25%gcc@12.2.0 +wrappers".into(),
        modules: strings(&[
            "craype/2.7.20",
            "cray-mpich/8.1.25",
            "libfabric/1.15.2.0",
            "cray-pals/1.2.11",
        ]),
        ..ExternalPackage::default()
    });
    site.packages.add_package(&ExternalPackage {
        name: "parallel-netcdf".into(),
        spec: "parallel-netcdf@1.12.3".into(),
        modules: strings(&[
            "ncarenv/23.09",
            "gcc/12.2.0",
            "cray-mpich/8.1.25",
            "parallel-netcdf/1.12.3",
        ]),
        ..ExternalPackage::default()
    });
    for (name, version, hash) in [
        ("netcdf-c", "4.9.2", "3gy6"),
        ("netcdf-fortran", "4.6.1", "7czy"),
        ("netcdf-cxx4", "4.3.1", "i4z2"),
    ] {
        site.packages.add_package(&ExternalPackage {
            name: name.into(),
            spec: format!("{name}@{version}"),
            prefix: format!("{NETCDF_ROOT}/{name}/{version}/gcc/12.2.0/{hash}"),
            modules: strings(&["ncarenv/23.09", "gcc/12.2.0", "netcdf/4.9.2"]),
            ..ExternalPackage::default()
        });
    }

    site.compilers.add_compiler(&CompilerSpec {
        spec: "gcc@12.2.0".into(),
        paths: serde_json::from_value(json!({
            "cc": "/opt/cray/pe/gcc/12.2.0/bin/gcc",
            "cxx": "/opt/cray/pe/gcc/12.2.0/bin/g++",
            "f77": "/opt/cray/pe/gcc/12.2.0/bin/gfortran",
            "fc": "/opt/cray/pe/gcc/12.2.0/bin/gfortran"
        }))?,
        operating_system: "sles15".into(),
        target: "x86_64".into(),
        modules: Some(strings(&["ncarenv/23.09", "gcc/12.2.0"])),
        environment: Some(serde_json::from_value(json!({
            "set": {"FI_CXI_RX_MATCH_MODE": "hybrid"}
        }))?),
        extra_rpaths: Some(Vec::new()),
        ..CompilerSpec::default()
    });

    site.modules.add_module_type(&ModuleTypeSpec {
        module_type: "lmod".into(),
        autoload: "run".into(),
        hash_length: 8,
        hide_implicits: true,
        include: strings(&["cray-mpich", "python"]),
        ..ModuleTypeSpec::default()
    });

    site.config.set_build_jobs(3);

    site.write(&args.out_dir)?;
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}
