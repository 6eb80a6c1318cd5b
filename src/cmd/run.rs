use bootforge::config::QemuConfig;
use bootforge::error::{BfResult, BootForgeError};
use bootforge::runner;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// EFI binary to boot.
    pub efi: PathBuf,

    #[command(flatten)]
    pub config: QemuConfig,
}

pub fn run(args: RunArgs) -> BfResult<()> {
    let cfg = &args.config;

    if !args.efi.is_file() {
        return Err(BootForgeError::MissingInput(args.efi.clone()));
    }

    // QEMU mounts the staged directory as a raw FAT drive, so this is a
    // rebuild-from-scratch every run.
    let esp_dir = Path::new("deploy").join("ESP");
    let boot_dir = esp_dir.join("EFI").join("BOOT");
    if Path::new("deploy").exists() {
        fs::remove_dir_all("deploy")?;
    }
    fs::create_dir_all(&boot_dir)?;
    fs::copy(&args.efi, boot_dir.join("BOOTX64.EFI"))?;

    info!("🖥️  Booting {} under QEMU", args.efi.display());

    runner::run_step(
        "launch QEMU",
        Command::new(&cfg.qemu)
            .arg("-bios")
            .arg(&cfg.bios)
            .arg("-drive")
            .arg(format!("format=raw,file=fat:rw:{}", esp_dir.display()))
            .arg("-m")
            .arg(&cfg.memory)
            .arg("-device")
            .arg(format!("virtio-vga,xres={},yres={}", cfg.xres, cfg.yres))
            .args(["-net", "none", "-serial", "stdio"])
            .arg("-display")
            .arg(&cfg.display)
            .args(["-d", "int,cpu_reset", "-D"])
            .arg(&cfg.log_file)
            .arg("-no-reboot"),
    )
}
