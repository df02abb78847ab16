// Prompt assembly: pure functions from a validated `OutreachRequest` to the two
// text blocks sent to the provider. No I/O happens here.

use crate::outreach::models::OutreachRequest;
use crate::outreach::prompts::{
    fill_template, INSTRUCTION_TEMPLATE, NAMA_PERUSAHAAN_PLACEHOLDER, NAMA_PIC_PLACEHOLDER,
    SENDER_SECTION_HEADING, TASK_LINE,
};

/// The rendered prompt: `instruction` goes to the system instruction field,
/// `data` is the user content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBlocks {
    pub instruction: String,
    pub data: String,
}

pub fn build_prompt(request: &OutreachRequest) -> PromptBlocks {
    PromptBlocks {
        instruction: render_instruction_block(request),
        data: render_data_block(request),
    }
}

/// Renders the fixed rule set, parameterized only by tone and language.
pub fn render_instruction_block(request: &OutreachRequest) -> String {
    fill_template(
        INSTRUCTION_TEMPLATE,
        &[
            ("gaya_bahasa", request.gaya_bahasa.as_str()),
            ("bahasa", request.bahasa.as_str()),
        ],
    )
}

/// Renders one `Label: value` line per field, then the sender profile and the task line.
pub fn render_data_block(request: &OutreachRequest) -> String {
    let sender = &request.sender;

    let scenario: [(&str, &str); 9] = [
        ("Platform", request.platform.as_str()),
        ("Bahasa yang Diminta", request.bahasa.as_str()),
        ("Gaya Bahasa", request.gaya_bahasa.as_str()),
        ("Status Prospek", request.status_prospek.as_str()),
        ("Tujuan Outreach", request.tujuan_outreach.as_str()),
        (
            "Nama Prospek",
            request.nama_pic.as_deref().unwrap_or(NAMA_PIC_PLACEHOLDER),
        ),
        (
            "Nama Perusahaan",
            request
                .nama_perusahaan_customer
                .as_deref()
                .unwrap_or(NAMA_PERUSAHAAN_PLACEHOLDER),
        ),
        ("Produk/Layanan Kami", request.layanan.as_str()),
        ("Perkiraan Pain Point Prospek", request.pain_point.as_str()),
    ];

    let sender_lines: [(&str, &str); 8] = [
        ("Nama Pengirim", sender.nama_sales.as_str()),
        ("Jabatan Sales", sender.jabatan_sales.as_str()),
        ("Email Sales", sender.email_sales.as_str()),
        ("HP Sales", sender.hp_sales.as_str()),
        ("Nama Perusahaan Asal", sender.nama_perusahaan_sales.as_str()),
        ("Web Perusahaan", sender.web_perusahaan.as_str()),
        ("Telepon Perusahaan", sender.telp_perusahaan.as_str()),
        ("Alamat Perusahaan", sender.alamat_perusahaan.as_str()),
    ];

    let mut out = String::from("\n");
    push_lines(&mut out, &scenario);
    out.push('\n');
    out.push_str(SENDER_SECTION_HEADING);
    out.push('\n');
    push_lines(&mut out, &sender_lines);
    out.push('\n');
    out.push_str(TASK_LINE);
    out.push('\n');
    out
}

fn push_lines(out: &mut String, lines: &[(&str, &str)]) {
    for (label, value) in lines {
        out.push_str(label);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
}
