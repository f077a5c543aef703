//! The built-in table catalog
//!
//! The specifications below are a manually maintained, simplified copy of the
//! table definitions in SUPABASE-INVENTORY.md. The inventory stays the source
//! of truth; it is not parsed programmatically, so keep the two in sync by
//! hand when the schema changes.
//!
//! Column blocks are raw DDL text emitted verbatim inside CREATE TABLE.

use once_cell::sync::Lazy;

use super::types::{Catalog, TableSpec};

static BUILTIN: Lazy<Catalog> = Lazy::new(build);

/// The fixed catalog the emitter runs over
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

fn build() -> Catalog {
    let mut catalog = Catalog::new();

    let specs = [
        clients(),
        medications(),
        medication_history(),
        dosage_info(),
        audit_log(),
        api_audit_log(),
    ];

    for table in specs {
        catalog
            .add_table(table)
            .expect("built-in catalog has duplicate table names");
    }

    catalog
}

fn clients() -> TableSpec {
    TableSpec::new(
        "clients",
        r#"
  id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
  organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,

  -- Basic Information
  first_name TEXT NOT NULL,
  last_name TEXT NOT NULL,
  date_of_birth DATE NOT NULL,
  gender TEXT CHECK (gender IN ('male', 'female', 'other', 'prefer_not_to_say')),

  -- Contact Information
  email TEXT,
  phone TEXT,
  address JSONB DEFAULT '{}', -- {street, city, state, zip_code, country}

  -- Emergency Contact
  emergency_contact JSONB DEFAULT '{}', -- {name, relationship, phone, alternate_phone}

  -- Medical Information
  allergies TEXT[],
  medical_conditions TEXT[],
  blood_type TEXT,

  -- Administrative
  status TEXT DEFAULT 'active' CHECK (status IN ('active', 'inactive', 'archived')),
  admission_date DATE,
  discharge_date DATE,
  notes TEXT,
  metadata JSONB DEFAULT '{}',

  -- Audit
  created_by UUID REFERENCES users(id),
  updated_by UUID REFERENCES users(id),
  created_at TIMESTAMPTZ DEFAULT NOW(),
  updated_at TIMESTAMPTZ DEFAULT NOW()"#,
        "Patient/client records with full medical information",
    )
    .with_index("idx_clients_organization", "organization_id")
    .with_index("idx_clients_name", "last_name, first_name")
    .with_index("idx_clients_status", "status")
    .with_index("idx_clients_dob", "date_of_birth")
}

fn medications() -> TableSpec {
    TableSpec::new(
        "medications",
        r#"
  id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
  organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,

  -- Medication Information
  name TEXT NOT NULL,
  generic_name TEXT,
  brand_names TEXT[],
  rxnorm_cui TEXT, -- RXNorm Concept Unique Identifier
  ndc_codes TEXT[], -- National Drug Codes

  -- Classification
  category_broad TEXT,
  category_specific TEXT,
  drug_class TEXT,

  -- Flags
  is_psychotropic BOOLEAN DEFAULT false,
  is_controlled BOOLEAN DEFAULT false,
  controlled_substance_schedule TEXT, -- Schedule I-V
  is_narcotic BOOLEAN DEFAULT false,
  requires_monitoring BOOLEAN DEFAULT false,
  is_high_alert BOOLEAN DEFAULT false,

  -- Details
  active_ingredients JSONB DEFAULT '[]', -- [{name, strength, unit}]
  available_forms TEXT[], -- ['tablet', 'capsule', 'liquid', etc.]
  available_strengths TEXT[], -- ['5mg', '10mg', '20mg']

  -- Additional Information
  manufacturer TEXT,
  warnings TEXT[],
  black_box_warning TEXT,
  metadata JSONB DEFAULT '{}',

  -- Status
  is_active BOOLEAN DEFAULT true,
  is_formulary BOOLEAN DEFAULT true,

  -- Audit
  created_by UUID REFERENCES users(id),
  updated_by UUID REFERENCES users(id),
  created_at TIMESTAMPTZ DEFAULT NOW(),
  updated_at TIMESTAMPTZ DEFAULT NOW()"#,
        "Medication catalog with comprehensive drug information",
    )
    .with_index("idx_medications_organization", "organization_id")
    .with_index("idx_medications_name", "name")
    .with_index("idx_medications_generic_name", "generic_name")
    .with_index("idx_medications_rxnorm", "rxnorm_cui")
    .with_index("idx_medications_is_controlled", "is_controlled")
    .with_index("idx_medications_is_active", "is_active")
}

fn medication_history() -> TableSpec {
    TableSpec::new(
        "medication_history",
        r#"
  id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
  organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,
  client_id UUID NOT NULL REFERENCES clients(id) ON DELETE CASCADE,
  medication_id UUID NOT NULL REFERENCES medications(id),

  -- Prescription Details
  prescription_date DATE NOT NULL,
  start_date DATE NOT NULL,
  end_date DATE,
  discontinue_date DATE,
  discontinue_reason TEXT,

  -- Prescriber Information
  prescriber_name TEXT,
  prescriber_npi TEXT, -- National Provider Identifier
  prescriber_license TEXT,

  -- Dosage Information
  dosage_amount DECIMAL,
  dosage_unit TEXT,
  frequency TEXT,
  route TEXT, -- oral, injection, topical, etc.
  instructions TEXT,

  -- PRN (As Needed) Information
  is_prn BOOLEAN DEFAULT false,
  prn_reason TEXT,

  -- Status
  status TEXT DEFAULT 'active' CHECK (status IN ('active', 'completed', 'discontinued', 'on_hold')),

  -- Tracking
  refills_authorized INTEGER,
  refills_used INTEGER DEFAULT 0,
  last_filled_date DATE,
  pharmacy_name TEXT,

  -- Clinical Notes
  notes TEXT,
  side_effects_reported TEXT[],
  effectiveness_rating INTEGER CHECK (effectiveness_rating BETWEEN 1 AND 5),

  -- Compliance
  compliance_percentage DECIMAL,
  missed_doses_count INTEGER DEFAULT 0,

  -- Additional Data
  metadata JSONB DEFAULT '{}',

  -- Audit
  created_by UUID REFERENCES users(id),
  updated_by UUID REFERENCES users(id),
  created_at TIMESTAMPTZ DEFAULT NOW(),
  updated_at TIMESTAMPTZ DEFAULT NOW()"#,
        "Tracks all medication prescriptions and administration history",
    )
    .with_index("idx_medication_history_organization", "organization_id")
    .with_index("idx_medication_history_client", "client_id")
    .with_index("idx_medication_history_medication", "medication_id")
    .with_index("idx_medication_history_status", "status")
    .with_index("idx_medication_history_prescription_date", "prescription_date")
    .with_index("idx_medication_history_is_prn", "is_prn")
}

fn dosage_info() -> TableSpec {
    TableSpec::new(
        "dosage_info",
        r#"
  id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
  organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,
  medication_history_id UUID NOT NULL REFERENCES medication_history(id) ON DELETE CASCADE,
  client_id UUID NOT NULL REFERENCES clients(id) ON DELETE CASCADE,

  -- Administration Details
  scheduled_datetime TIMESTAMPTZ NOT NULL,
  administered_datetime TIMESTAMPTZ,
  administered_by UUID REFERENCES users(id),

  -- Dosage
  scheduled_amount DECIMAL NOT NULL,
  administered_amount DECIMAL,
  unit TEXT NOT NULL,

  -- Status
  status TEXT NOT NULL DEFAULT 'scheduled' CHECK (status IN (
    'scheduled', 'administered', 'skipped', 'refused', 'missed', 'late', 'early'
  )),

  -- Reasons and Notes
  skip_reason TEXT,
  refusal_reason TEXT,
  administration_notes TEXT,

  -- Vitals (if monitored)
  vitals_before JSONB DEFAULT '{}', -- {bp, hr, temp, etc.}
  vitals_after JSONB DEFAULT '{}',

  -- Side Effects
  side_effects_observed TEXT[],
  adverse_reaction BOOLEAN DEFAULT false,
  adverse_reaction_details TEXT,

  -- Verification
  verified_by UUID REFERENCES users(id),
  verification_datetime TIMESTAMPTZ,

  -- Additional Data
  metadata JSONB DEFAULT '{}',

  -- Audit
  created_at TIMESTAMPTZ DEFAULT NOW(),
  updated_at TIMESTAMPTZ DEFAULT NOW()"#,
        "Tracks actual medication administration events",
    )
    .with_index("idx_dosage_info_organization", "organization_id")
    .with_index("idx_dosage_info_medication_history", "medication_history_id")
    .with_index("idx_dosage_info_client", "client_id")
    .with_index("idx_dosage_info_scheduled_datetime", "scheduled_datetime")
    .with_index("idx_dosage_info_status", "status")
    .with_index("idx_dosage_info_administered_by", "administered_by")
}

fn audit_log() -> TableSpec {
    TableSpec::new(
        "audit_log",
        r#"
  id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
  organization_id UUID REFERENCES organizations(id) ON DELETE SET NULL,

  -- Event Information
  event_type TEXT NOT NULL, -- create, update, delete, access, export, print, etc.
  event_category TEXT NOT NULL, -- data_change, authentication, authorization, system
  event_name TEXT NOT NULL,
  event_description TEXT,

  -- Actor Information
  user_id UUID REFERENCES users(id),
  user_email TEXT,
  user_name TEXT,
  user_roles TEXT[],
  impersonated_by UUID REFERENCES users(id),

  -- Resource Information
  resource_type TEXT, -- table name or resource type
  resource_id UUID,
  resource_name TEXT,

  -- Change Details
  operation TEXT, -- INSERT, UPDATE, DELETE, SELECT
  old_values JSONB,
  new_values JSONB,
  changed_fields TEXT[],

  -- Request Context
  ip_address INET,
  user_agent TEXT,
  session_id TEXT,
  request_id TEXT,
  request_method TEXT, -- GET, POST, PUT, DELETE, etc.
  request_path TEXT,

  -- Response
  response_status INTEGER,
  error_message TEXT,

  -- Metadata
  metadata JSONB DEFAULT '{}',

  -- Timestamp
  created_at TIMESTAMPTZ DEFAULT NOW()"#,
        "General system audit trail for all data changes",
    )
    .with_index("idx_audit_log_organization", "organization_id")
    .with_index("idx_audit_log_user", "user_id")
    .with_index("idx_audit_log_event_type", "event_type")
    .with_index("idx_audit_log_resource", "resource_type, resource_id")
    .with_index("idx_audit_log_created_at", "created_at DESC")
    .with_index("idx_audit_log_session", "session_id")
}

fn api_audit_log() -> TableSpec {
    TableSpec::new(
        "api_audit_log",
        r#"
  id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
  organization_id UUID REFERENCES organizations(id) ON DELETE SET NULL,

  -- API Request
  request_id TEXT UNIQUE NOT NULL,
  request_timestamp TIMESTAMPTZ NOT NULL,
  request_method TEXT NOT NULL,
  request_path TEXT NOT NULL,
  request_query_params JSONB,
  request_headers JSONB,
  request_body JSONB,
  request_size_bytes INTEGER,

  -- API Response
  response_timestamp TIMESTAMPTZ,
  response_status_code INTEGER,
  response_headers JSONB,
  response_body JSONB,
  response_size_bytes INTEGER,
  response_time_ms INTEGER,

  -- Authentication
  auth_method TEXT, -- bearer_token, api_key, oauth, etc.
  auth_user_id UUID REFERENCES users(id),
  auth_organization_id UUID REFERENCES organizations(id),
  auth_scopes TEXT[],

  -- Rate Limiting
  rate_limit_tier TEXT,
  rate_limit_remaining INTEGER,
  rate_limit_reset_at TIMESTAMPTZ,

  -- Error Information
  error_code TEXT,
  error_message TEXT,
  error_details JSONB,

  -- Performance Metrics
  database_queries_count INTEGER,
  database_time_ms INTEGER,
  cache_hits INTEGER,
  cache_misses INTEGER,

  -- Client Information
  client_ip INET,
  client_user_agent TEXT,
  client_version TEXT,
  client_sdk TEXT,

  -- HATEOAS Links (if applicable)
  hateoas_links JSONB,

  -- Metadata
  metadata JSONB DEFAULT '{}',

  -- Timestamp
  created_at TIMESTAMPTZ DEFAULT NOW()"#,
        "REST API specific audit logging with performance metrics",
    )
    .with_index("idx_api_audit_log_organization", "organization_id")
    .with_index("idx_api_audit_log_request_id", "request_id")
    .with_index("idx_api_audit_log_user", "auth_user_id")
    .with_index("idx_api_audit_log_timestamp", "request_timestamp DESC")
    .with_index("idx_api_audit_log_method_path", "request_method, request_path")
    .with_index("idx_api_audit_log_status", "response_status_code")
    .with_index("idx_api_audit_log_client_ip", "client_ip")
}
