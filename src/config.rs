use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct IsoConfig {
    /// EFI binary to embed in the ESP image.
    #[arg(long, default_value = "deploy/ESP/EFI/BOOT/BOOTX64.EFI")]
    pub efi: PathBuf,

    #[arg(short, long, default_value = "uefi_boot.iso")]
    pub output: PathBuf,

    /// Volume label passed to the ISO mastering tool.
    #[arg(long, default_value = "MYUEFIISO")]
    pub label: String,

    #[arg(long, default_value_t = 64)]
    pub esp_size_mb: u64,
}

#[derive(Args, Debug, Clone)]
pub struct QemuConfig {
    #[arg(long, default_value = "qemu-system-x86_64")]
    pub qemu: String,

    /// OVMF firmware image.
    #[arg(long, default_value = "OVMF.fd")]
    pub bios: PathBuf,

    #[arg(short, long, default_value = "1G")]
    pub memory: String,

    #[arg(long, default_value_t = 1920)]
    pub xres: u32,

    #[arg(long, default_value_t = 1080)]
    pub yres: u32,

    #[arg(long, default_value = "sdl")]
    pub display: String,

    /// Where QEMU writes its int/cpu_reset debug log.
    #[arg(long, default_value = "qemu.log")]
    pub log_file: PathBuf,
}
