use serde::{Deserialize, Serialize};

/// Body envelope of `POST /api/generate-script`.
#[derive(Debug, Deserialize)]
pub struct GenerateScriptRequest {
    #[serde(default)]
    pub inputs: Option<OutreachInputs>,
}

#[derive(Debug, Serialize)]
pub struct GenerateScriptResponse {
    pub script: String,
}

/// Form fields as submitted. Everything is optional on the wire; `validate` decides
/// what a usable request is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutreachInputs {
    pub platform: Option<String>,
    pub bahasa: Option<String>,
    pub gaya_bahasa: Option<String>,
    pub status_prospek: Option<String>,
    pub tujuan_outreach: Option<String>,
    pub pain_point: Option<String>,
    pub layanan: Option<String>,
    pub nama_pic: Option<String>,
    pub nama_perusahaan_customer: Option<String>,
    pub nama_sales: Option<String>,
    pub jabatan_sales: Option<String>,
    pub email_sales: Option<String>,
    pub hp_sales: Option<String>,
    pub nama_perusahaan_sales: Option<String>,
    pub web_perusahaan: Option<String>,
    pub telp_perusahaan: Option<String>,
    pub alamat_perusahaan: Option<String>,
}

/// A validated outreach scenario. Only the prospect identity fields may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachRequest {
    /// "Email" or "WhatsApp" in practice; echoed verbatim into the prompt.
    pub platform: String,
    pub bahasa: String,
    pub gaya_bahasa: String,
    pub status_prospek: String,
    pub tujuan_outreach: String,
    pub pain_point: String,
    pub layanan: String,
    pub nama_pic: Option<String>,
    pub nama_perusahaan_customer: Option<String>,
    pub sender: SenderProfile,
}

/// The salesperson and company the script is signed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderProfile {
    pub nama_sales: String,
    pub jabatan_sales: String,
    pub email_sales: String,
    pub hp_sales: String,
    pub nama_perusahaan_sales: String,
    pub web_perusahaan: String,
    pub telp_perusahaan: String,
    pub alamat_perusahaan: String,
}

/// Whitespace-only values count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl OutreachInputs {
    /// Checks every required field and builds the typed request.
    ///
    /// On failure returns the names of all missing fields, in form order.
    pub fn validate(self) -> Result<OutreachRequest, Vec<&'static str>> {
        let mut missing = Vec::new();
        let mut take = |name: &'static str, value: Option<String>| -> String {
            present(value).unwrap_or_else(|| {
                missing.push(name);
                String::new()
            })
        };

        let platform = take("platform", self.platform);
        let bahasa = take("bahasa", self.bahasa);
        let gaya_bahasa = take("gaya_bahasa", self.gaya_bahasa);
        let status_prospek = take("status_prospek", self.status_prospek);
        let tujuan_outreach = take("tujuan_outreach", self.tujuan_outreach);
        let pain_point = take("pain_point", self.pain_point);
        let layanan = take("layanan", self.layanan);
        let sender = SenderProfile {
            nama_sales: take("nama_sales", self.nama_sales),
            jabatan_sales: take("jabatan_sales", self.jabatan_sales),
            email_sales: take("email_sales", self.email_sales),
            hp_sales: take("hp_sales", self.hp_sales),
            nama_perusahaan_sales: take("nama_perusahaan_sales", self.nama_perusahaan_sales),
            web_perusahaan: take("web_perusahaan", self.web_perusahaan),
            telp_perusahaan: take("telp_perusahaan", self.telp_perusahaan),
            alamat_perusahaan: take("alamat_perusahaan", self.alamat_perusahaan),
        };

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(OutreachRequest {
            platform,
            bahasa,
            gaya_bahasa,
            status_prospek,
            tujuan_outreach,
            pain_point,
            layanan,
            nama_pic: present(self.nama_pic),
            nama_perusahaan_customer: present(self.nama_perusahaan_customer),
            sender,
        })
    }
}
