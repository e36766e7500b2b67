//! Behaviour of the `modules.yaml` builder.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface builder and rendering mistakes"
)]

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};
use serde_json::json;
use spack_site::{ModuleTypeSpec, Modules, SiteSection};
use test_helpers::{output::OutputDir, yaml};

#[fixture]
fn modules() -> Modules {
    Modules::new()
}

fn module_type(name: &str, autoload: &str, hash_length: u32) -> ModuleTypeSpec {
    ModuleTypeSpec {
        module_type: name.into(),
        autoload: autoload.into(),
        hash_length,
        hide_implicits: false,
        include: vec!["hdf5".into()],
        exclude: vec!["mpich".into()],
    }
}

#[rstest]
fn starts_with_empty_enable_list(modules: Modules) {
    let dict = modules.config().to_dict();
    assert_eq!(dict, json!({"default": {"enable": []}}));
}

#[rstest]
fn module_type_settings_are_recorded(mut modules: Modules) {
    modules.add_module_type(&ModuleTypeSpec {
        module_type: "tcl".into(),
        autoload: "all".into(),
        hash_length: 7,
        hide_implicits: true,
        include: vec!["hdf5".into(), "netcdf".into()],
        exclude: vec!["openmpi".into()],
    });
    let dict = modules.config().to_dict();
    assert_eq!(dict["default"]["enable"], json!(["tcl", {"override": true}]));
    assert_eq!(
        dict["default"]["tcl"],
        json!({
            "all": {"autoload": "all"},
            "hash_length": 7,
            "hide_implicits": true,
            "exclude": ["openmpi"],
            "include": ["hdf5", "netcdf"]
        })
    );
}

#[rstest]
fn empty_filters_are_omitted(mut modules: Modules) {
    modules.add_module_type(&ModuleTypeSpec {
        module_type: "lmod".into(),
        autoload: "run".into(),
        ..ModuleTypeSpec::default()
    });
    let dict = modules.config().to_dict();
    assert!(dict["default"]["lmod"].get("include").is_none());
    assert!(dict["default"]["lmod"].get("exclude").is_none());
}

#[rstest]
fn sentinel_follows_only_the_first_module_type(mut modules: Modules) {
    modules.add_module_type(&module_type("tcl", "direct", 4));
    modules.add_module_type(&module_type("lmod", "run", 0));
    let dict = modules.config().to_dict();
    assert_eq!(
        dict["default"]["enable"],
        json!(["tcl", {"override": true}, "lmod"])
    );
}

#[rstest]
fn written_plain_file_round_trips(mut modules: Modules) -> Result<()> {
    modules.add_module_type(&module_type("lmod", "direct", 5));
    let out = OutputDir::new()?;
    let path = out.join("modules.yaml");
    modules.write(&path, false)?;

    let data = yaml::read(&path)?;
    let lmod = &data["modules"]["default"]["lmod"];
    ensure!(lmod["all"]["autoload"] == json!("direct"), "got {data}");
    ensure!(lmod["hash_length"] == json!(5), "got {data}");
    ensure!(lmod["hide_implicits"] == json!(false), "got {data}");
    ensure!(lmod["include"] == json!(["hdf5"]), "got {data}");
    ensure!(lmod["exclude"] == json!(["mpich"]), "got {data}");
    Ok(())
}

#[rstest]
fn untouched_section_still_writes_default_block(modules: Modules) -> Result<()> {
    let out = OutputDir::new()?;
    let path = out.join("modules.yaml");
    ensure!(modules.write(&path, false)?, "expected a file");
    let data = yaml::read(&path)?;
    ensure!(data["modules"]["default"]["enable"] == json!([]), "got {data}");
    Ok(())
}

#[rstest]
fn spack_rendering_marks_enable_list(mut modules: Modules) -> Result<()> {
    modules.add_module_type(&module_type("lmod", "direct", 5));
    let rendered = modules.render(true)?.expect("non-empty section");
    let expected = concat!(
        "modules:\n",
        "  default:\n",
        "    enable:: \n",
        "    - lmod\n",
        "    lmod:\n",
        "      all:\n",
        "        autoload: direct\n",
        "      hash_length: 5\n",
        "      hide_implicits: false\n",
        "      exclude:\n",
        "      - mpich\n",
        "      include:\n",
        "      - hdf5",
    );
    ensure!(rendered == expected, "unexpected rendering:\n{rendered}");
    Ok(())
}
