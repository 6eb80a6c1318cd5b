use bootforge::config::IsoConfig;
use bootforge::error::{BfResult, BootForgeError};
use bootforge::runner;
use clap::Args;
use std::fs;
use std::process::Command;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct IsoArgs {
    #[command(flatten)]
    pub config: IsoConfig,
}

pub fn run(args: IsoArgs) -> BfResult<()> {
    let cfg = &args.config;

    if !cfg.efi.is_file() {
        return Err(BootForgeError::MissingInput(cfg.efi.clone()));
    }

    // All staging happens in a scratch dir that vanishes on drop.
    let tmp = tempfile::tempdir()?;
    let esp_img = tmp.path().join("esp.img");

    let esp = fs::File::create(&esp_img)?;
    esp.set_len(cfg.esp_size_mb * 1024 * 1024)?;
    drop(esp);

    runner::run_step(
        "format ESP image (FAT32)",
        Command::new("mkfs.vfat").args(["-F", "32"]).arg(&esp_img),
    )?;
    runner::run_step(
        "create ::EFI",
        Command::new("mmd").arg("-i").arg(&esp_img).arg("::EFI"),
    )?;
    runner::run_step(
        "create ::EFI/BOOT",
        Command::new("mmd").arg("-i").arg(&esp_img).arg("::EFI/BOOT"),
    )?;
    runner::run_step(
        "copy EFI binary into ESP",
        Command::new("mcopy")
            .arg("-i")
            .arg(&esp_img)
            .arg(&cfg.efi)
            .arg("::EFI/BOOT/BOOTX64.EFI"),
    )?;

    let iso_root = tmp.path().join("root");
    fs::create_dir_all(&iso_root)?;
    fs::copy(&esp_img, iso_root.join("efiboot.img"))?;

    runner::run_step(
        "master UEFI ISO",
        Command::new("xorriso")
            .args(["-as", "mkisofs", "-o"])
            .arg(&cfg.output)
            .arg("-V")
            .arg(&cfg.label)
            .args([
                "-eltorito-alt-boot",
                "-e",
                "efiboot.img",
                "-no-emul-boot",
                "-isohybrid-gpt-basdat",
            ])
            .arg(&iso_root),
    )?;

    info!("💿 Bootable UEFI ISO written to {}", cfg.output.display());
    Ok(())
}
