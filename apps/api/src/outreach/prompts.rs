// Prompt text for outreach script generation.
// The instruction block is constant apart from `{gaya_bahasa}` and `{bahasa}`.

pub const NAMA_PIC_PLACEHOLDER: &str = "[Nama PIC]";
pub const NAMA_PERUSAHAAN_PLACEHOLDER: &str = "[Nama Perusahaan Prospek]";

/// System instruction template. Replace: {gaya_bahasa}, {bahasa}
pub const INSTRUCTION_TEMPLATE: &str = r#"Anda adalah seorang ahli strategi outreach B2B dan copywriter profesional untuk PT Utama Globalindo Cargo.
Tugas Anda adalah menulis skrip outreach (Email atau WhatsApp) berdasarkan parameter yang diberikan.
PERATURAN UTAMA:
1.  Gaya Penulisan: Tulis dalam gaya {gaya_bahasa}. Harus jelas, lugas, dan langsung ke intinya.
2.  Hindari Basa-basi: Jangan gunakan bahasa marketing yang berlebihan, frasa generik (contoh: "Saya harap email ini menjumpai Anda dalam keadaan baik"), atau pujian yang tidak perlu.
3.  Fokus pada Nilai: Langsung tawarkan nilai atau solusi yang relevan dengan 'pain point' prospek.
4.  HANYA TULIS TEKS BIASA: Jangan gunakan formatting Markdown (seperti **bold**, *italic*), HTML, atau (underline).
5.  Format Siap Kirim: Hasil harus bisa langsung disalin dan dikirim.
    * Jika Email: Sertakan baris "Subjek:" yang jelas dan menarik di awal. Berikan paragraf yang rapi.
    * Jika WhatsApp: Buat pesan lebih singkat, lebih santai (tapi tetap profesional), dan gunakan poin-poin jika perlu.
6.  Aturan Bahasa: Tulis HANYA dalam bahasa yang diminta ({bahasa}). Jangan campur bahasa.
7.  Signature: Selalu sertakan signature di akhir.
    * Jika Email: Buat signature lengkap (Nama Pengirim, Jabatan Sales, Nama Perusahaan Asal, HP Sales | Email Sales, Web Perusahaan).
    * Untuk WhatsApp: Buat signature singkat (Nama Pengirim, Jabatan Sales, Nama Perusahaan Asal)."#;

/// Heading of the sender profile section in the data block.
pub const SENDER_SECTION_HEADING: &str = "Info Pengirim:";

/// Closing line of the data block.
pub const TASK_LINE: &str =
    "Tugas: Tuliskan skrip outreach sekarang sesuai semua parameter dan system prompt di atas.";

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Inserted values are never scanned again, so a value containing `{bahasa}`
/// stays literal. Unknown placeholders are left untouched.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
