// Integration tests for the hlsclt binary.

mod common;

use anyhow::Result;
use common::{warning_lines, HlsFixture};
use predicates::prelude::*;

const COSIM_PASS_REPORT: &str = "\
+-----------+--------+
| RTL       | Status |
+-----------+--------+
|     VHDL  |  Pass  |
|  Verilog  |   NA   |
+-----------+--------+
";

mod missing_project {
    use super::*;

    #[test]
    fn test_every_command_aborts() -> Result<()> {
        let fixture = HlsFixture::new("vhdl")?;
        let commands: [&[&str]; 4] = [
            &["status"],
            &["status", "--json"],
            &["report", "--stage", "csim"],
            &["open_gui"],
        ];

        for args in commands {
            fixture
                .hlsclt()?
                .args(args)
                .assert()
                .failure()
                .code(1)
                .stdout(predicate::str::is_empty())
                .stderr(predicate::str::contains(
                    "Can't find a project folder have you run a build process yet?",
                ));
        }
        Ok(())
    }
}

mod status {
    use super::*;

    #[test]
    fn test_empty_project_has_no_tags() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;

        fixture
            .hlsclt()?
            .args(["status", "--json"])
            .assert()
            .success()
            .stdout("[]\n");

        fixture
            .hlsclt()?
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "No build stages have completed for proj_fir, solution number: 1",
            ));
        Ok(())
    }

    #[test]
    fn test_cosim_vhdl_pass() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture.add_file(1, "sim/report/fir_cosim.rpt", COSIM_PASS_REPORT)?;

        fixture
            .hlsclt()?
            .args(["status", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"cosim_done\""))
            .stdout(predicate::str::contains("\"cosim_vhdl_pass\""))
            .stdout(predicate::str::contains("cosim_vhdl_fail").not());
        Ok(())
    }

    #[test]
    fn test_both_languages_evaluated() -> Result<()> {
        let fixture = HlsFixture::with_project("[vhdl, verilog]")?;
        fixture.add_file(1, "impl/report/vhdl/fir_export.rpt", "")?;
        fixture.add_file(1, "impl/report/verilog/fir_export.rpt", "")?;

        fixture
            .hlsclt()?
            .args(["status", "--json"])
            .assert()
            .success()
            .stdout("[\"evaluate_vhdl_done\",\"evaluate_verilog_done\"]\n");
        Ok(())
    }

    #[test]
    fn test_human_output_lists_tags_in_order() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture.add_file(1, "csim/report/fir_csim.log", "")?;
        fixture.add_file(1, "syn/report/fir_csynth.rpt", "")?;
        fixture.add_dir(1, "impl/ip")?;

        let output = fixture.hlsclt()?.arg("status").output()?;
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout)?;
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Project status for proj_fir, solution number: 1",
                "  • csim_done",
                "  • syn_done",
                "  • export_ip_done",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_highest_solution_is_default() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture.add_file(1, "csim/report/fir_csim.log", "")?;
        fixture.add_file(2, "syn/report/fir_csynth.rpt", "")?;

        fixture
            .hlsclt()?
            .args(["status", "--json"])
            .assert()
            .success()
            .stdout("[\"syn_done\"]\n");

        fixture
            .hlsclt()?
            .args(["status", "--json", "--solution", "1"])
            .assert()
            .success()
            .stdout("[\"csim_done\"]\n");
        Ok(())
    }
}

mod report {
    use super::*;

    #[test]
    fn test_missing_cosim_warns_once() -> Result<()> {
        let fixture = HlsFixture::with_project("[vhdl, verilog]")?;

        let output = fixture
            .hlsclt()?
            .args(["report", "--stage", "cosim"])
            .output()?;
        assert!(output.status.success());

        let warnings = warning_lines(&output.stdout);
        assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
        assert!(warnings[0].contains("cosim"));
        assert!(warnings[0].contains("proj_fir"));
        assert!(warnings[0].contains("solution number: 1"));
        Ok(())
    }

    #[test]
    fn test_each_stage_is_attempted() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture.add_file(1, "syn/report/fir_csynth.rpt", "")?;

        let output = fixture
            .hlsclt()?
            .args(["report", "-s", "csim", "-s", "syn", "-s", "export"])
            .output()?;
        assert!(output.status.success());

        let warnings = warning_lines(&output.stdout);
        assert_eq!(warnings.len(), 2, "warnings: {warnings:?}");
        assert!(warnings[0].contains("the csim report"));
        assert!(warnings[1].contains("the export report"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_reports_open_quietly() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture.add_file(1, "csim/report/fir_csim.log", "")?;
        fixture.add_file(1, "sim/report/fir_cosim.rpt", COSIM_PASS_REPORT)?;
        fixture.add_file(1, "sim/report/vhdl/fir.log", "")?;

        fixture
            .hlsclt()?
            .args(["report", "-s", "csim", "-s", "cosim"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_opener_is_not_reported_as_missing() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture.write_config(
            "project_name: proj_fir\ntop_level_function_name: fir\nopener: \"false\"\n",
        )?;
        fixture.add_file(1, "syn/report/fir_csynth.rpt", "")?;

        let output = fixture.hlsclt()?.args(["report", "-s", "syn"]).output()?;
        assert!(output.status.success());

        let warnings = warning_lines(&output.stdout);
        assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
        assert!(warnings[0].contains("Failed to open"));
        assert!(warnings[0].contains("fir_csynth.rpt"));
        assert!(!warnings[0].contains("doesn't exist"));
        Ok(())
    }

    #[test]
    fn test_unknown_stage_is_rejected() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture
            .hlsclt()?
            .args(["report", "-s", "impl"])
            .assert()
            .failure();
        Ok(())
    }
}

mod gui {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_open_gui_returns_immediately() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture
            .hlsclt()?
            .arg("open_gui")
            .assert()
            .success()
            .stderr(predicate::str::contains("Opening proj_fir in true"));
        Ok(())
    }

    #[test]
    fn test_missing_gui_executable_fails() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture.write_config(
            "project_name: proj_fir\ntop_level_function_name: fir\nhls_executable: hlsclt-no-such-vivado\n",
        )?;

        fixture
            .hlsclt()?
            .arg("open-gui")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "Failed to launch hlsclt-no-such-vivado",
            ));
        Ok(())
    }
}

mod config {
    use super::*;

    #[test]
    fn test_invalid_language_is_a_config_error() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture.write_config("project_name: proj_fir\nlanguage: systemc\n")?;

        fixture
            .hlsclt()?
            .arg("status")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Configuration error"));
        Ok(())
    }

    #[test]
    fn test_explicit_config_file() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture.write_config("project_name: proj_elsewhere\n")?;
        std::fs::write(
            fixture.project_dir().parent().unwrap().join("alt.yaml"),
            "project_name: proj_fir\ntop_level_function_name: fir\n",
        )?;
        fixture.add_file(1, "csim/report/fir_csim.log", "")?;

        fixture
            .hlsclt()?
            .args(["--config", "alt.yaml", "status", "--json"])
            .assert()
            .success()
            .stdout("[\"csim_done\"]\n");
        Ok(())
    }

    #[test]
    fn test_missing_explicit_config_fails() -> Result<()> {
        let fixture = HlsFixture::with_project("vhdl")?;
        fixture
            .hlsclt()?
            .args(["--config", "nope.yaml", "status"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("nope.yaml"));
        Ok(())
    }
}
